use super::*;

/// A cursor into an immutable buffer that implements [Decoder].
#[derive(Copy, Clone, Debug)]
pub struct RefDecoder<'a>(&'a [u8]);

impl<'a> RefDecoder<'a> {
    pub fn new(x: &'a [u8]) -> Self {
        Self(x)
    }
}

impl<'a> Decoder<'a> for RefDecoder<'a> {
    #[inline]
    fn expect_eoi(&self) -> Option<()> {
        crate::util::check(self.0.is_empty())
    }

    #[inline]
    fn expect_u8(&mut self, x: u8) -> Option<()> {
        self.take_u8().filter(|y| *y == x).map(drop)
    }

    #[inline]
    fn take_u8(&mut self) -> Option<u8> {
        let (head, tail) = self.0.split_first()?;
        self.0 = tail;
        Some(*head)
    }

    #[inline]
    fn take_u32be(&mut self) -> Option<u32> {
        let bytes = self.take_bytes(std::mem::size_of::<u32>())?;
        let mut x = [0; 4];
        x.copy_from_slice(bytes);
        Some(u32::from_be_bytes(x))
    }

    #[inline]
    fn take_bytes(&mut self, len: usize) -> Option<&'a [u8]> {
        crate::util::check(self.0.len() >= len)?;
        let (head, tail) = self.0.split_at(len);
        self.0 = tail;
        Some(head)
    }
}
