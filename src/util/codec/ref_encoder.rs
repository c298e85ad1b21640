use super::*;
use crate::util::check;

/// A cursor into a mutable buffer that implements [Encoder].
#[derive(Debug)]
pub struct RefEncoder<'a> {
    pos: usize,
    buf: &'a mut [u8],
}

impl<'a> RefEncoder<'a> {
    /// Create a new slice encoder from a mutable piece of memory.
    pub fn new(x: &'a mut [u8]) -> Self {
        Self { pos: 0, buf: x }
    }

    pub fn is_full(&self) -> bool {
        self.pos >= self.buf.len()
    }
}

impl<'a> Encoder for RefEncoder<'a> {
    #[inline(always)]
    fn push_u8(&mut self, x: u8) -> Option<()> {
        check(self.buf.len() > self.pos)?;
        self.buf[self.pos] = x;
        self.pos += std::mem::size_of::<u8>();
        Some(())
    }

    #[inline(always)]
    fn push_u32be(&mut self, x: u32) -> Option<()> {
        self.push_bytes(&x.to_be_bytes())
    }

    #[inline]
    fn push_bytes(&mut self, x: &[u8]) -> Option<()> {
        check(self.buf.len() >= self.pos + x.len())?;
        self.buf[self.pos..][..x.len()].copy_from_slice(x);
        self.pos += x.len();
        Some(())
    }
}
