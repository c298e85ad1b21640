/// Basic consumption operations on a byte input.
///
/// A failing operation returns `None`. The decoder is not rolled back: callers abandon it.
pub trait Decoder<'a>: Clone {
    /// Succeeds if the input has been consumed completely.
    #[must_use]
    fn expect_eoi(&self) -> Option<()>;
    #[must_use]
    fn expect_u8(&mut self, x: u8) -> Option<()>;
    #[must_use]
    fn take_u8(&mut self) -> Option<u8>;
    #[must_use]
    fn take_u32be(&mut self) -> Option<u32>;
    #[must_use]
    fn take_bytes(&mut self, len: usize) -> Option<&'a [u8]>;
}
