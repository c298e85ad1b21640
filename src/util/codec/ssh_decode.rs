use super::*;

/// SSH specific decoding (inverse of [SshEncode]).
///
/// The result may contain references into the input. This avoids intermediate allocations
/// in the common case where a message is inspected while the packet is still in scope.
pub trait SshDecode<'a>: Sized {
    #[must_use]
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self>;
}

impl<'a> SshDecode<'a> for &'a str {
    #[inline]
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.take_str_framed()
    }
}
