use super::*;

/// SSH specific decoder operations.
pub trait SshDecoder<'a>: Decoder<'a> {
    #[must_use]
    fn take<T: SshDecode<'a>>(&mut self) -> Option<T> {
        T::decode(self)
    }
    #[must_use]
    fn take_bool(&mut self) -> Option<bool> {
        self.take_u8().map(|n| n != 0)
    }
    #[must_use]
    fn take_usize(&mut self) -> Option<usize> {
        // This is safe on all platforms where usize is at least 32 bits.
        Some(self.take_u32be()? as usize)
    }
    #[must_use]
    fn take_bytes_framed(&mut self) -> Option<&'a [u8]> {
        let len = self.take_usize()?;
        self.take_bytes(len)
    }
    #[must_use]
    fn take_str(&mut self, len: usize) -> Option<&'a str> {
        let bytes = self.take_bytes(len)?;
        std::str::from_utf8(bytes).ok()
    }
    #[must_use]
    fn take_str_framed(&mut self) -> Option<&'a str> {
        let len = self.take_usize()?;
        self.take_str(len)
    }
    /// Take a name-list (comma separated names in a single string).
    ///
    /// An empty string is an empty list and not a list with one empty name.
    #[must_use]
    fn take_name_list(&mut self) -> Option<Vec<&'a str>> {
        let list = self.take_str_framed()?;
        if list.is_empty() {
            return Some(vec![]);
        }
        Some(list.split(',').collect())
    }
    #[must_use]
    fn expect_str_framed(&mut self, x: &str) -> Option<()> {
        self.take_str_framed().filter(|y| *y == x).map(drop)
    }
}

impl<'a> SshDecoder<'a> for RefDecoder<'a> {}
