use super::*;

/// SSH specific encoder operations.
pub trait SshEncoder: Encoder {
    #[must_use]
    #[inline]
    fn push<T: SshEncode>(&mut self, x: &T) -> Option<()> {
        x.encode(self)
    }
    #[must_use]
    #[inline]
    fn push_bool(&mut self, x: bool) -> Option<()> {
        self.push_u8(if x { 1 } else { 0 })
    }
    #[must_use]
    #[inline]
    fn push_usize(&mut self, x: usize) -> Option<()> {
        crate::util::check(x <= u32::MAX as usize)?;
        self.push_u32be(x as u32)
    }
    #[must_use]
    #[inline]
    fn push_str(&mut self, x: &str) -> Option<()> {
        self.push_bytes(x.as_bytes())
    }
    #[must_use]
    #[inline]
    fn push_str_framed(&mut self, x: &str) -> Option<()> {
        self.push_usize(x.len())?;
        self.push_str(x)
    }
    #[must_use]
    #[inline]
    fn push_bytes_framed(&mut self, x: &[u8]) -> Option<()> {
        self.push_usize(x.len())?;
        self.push_bytes(x)
    }
    #[must_use]
    fn push_name_list<S: AsRef<str>>(&mut self, xs: &[S]) -> Option<()> {
        let commas = std::cmp::max(1, xs.len()) - 1;
        let size = commas + xs.iter().map(|x| x.as_ref().len()).sum::<usize>();
        self.push_usize(size)?;
        if let Some((x, ys)) = xs.split_first() {
            self.push_str(x.as_ref())?;
            for y in ys {
                self.push_u8(b',')?;
                self.push_str(y.as_ref())?;
            }
        }
        Some(())
    }
}

impl SshEncoder for SizeEncoder {}

impl<'a> SshEncoder for RefEncoder<'a> {}
