use super::*;

/// Counts the bytes a sequence of encoding operations would produce.
///
/// Used by [SshCodec::size] to allocate message buffers of exactly the right length.
#[derive(Debug, Default)]
pub struct SizeEncoder(usize);

impl SizeEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<SizeEncoder> for usize {
    fn from(x: SizeEncoder) -> usize {
        x.0
    }
}

impl Encoder for SizeEncoder {
    fn push_u8(&mut self, _: u8) -> Option<()> {
        self.0 = self.0.checked_add(1)?;
        Some(())
    }

    fn push_u32be(&mut self, _: u32) -> Option<()> {
        self.0 = self.0.checked_add(4)?;
        Some(())
    }

    fn push_bytes(&mut self, x: &[u8]) -> Option<()> {
        self.0 = self.0.checked_add(x.len())?;
        Some(())
    }
}
