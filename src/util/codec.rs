mod decoder;
mod encoder;
mod ref_decoder;
mod ref_encoder;
mod size_encoder;
mod ssh_decode;
mod ssh_decoder;
mod ssh_encode;
mod ssh_encoder;

pub use self::decoder::*;
pub use self::encoder::*;
pub use self::ref_decoder::*;
pub use self::ref_encoder::*;
pub use self::size_encoder::*;
pub use self::ssh_decode::*;
pub use self::ssh_decoder::*;
pub use self::ssh_encode::*;
pub use self::ssh_encoder::*;

use crate::util::check;

/// Entry points for turning structures into bytes and back.
pub struct SshCodec;

impl SshCodec {
    /// Determine the exact encoded size of a structure without allocating.
    pub fn size<T: SshEncode>(x: &T) -> Option<usize> {
        let mut e = SizeEncoder::new();
        e.push(x)?;
        Some(e.into())
    }

    /// Encode a structure into a freshly allocated `Vec<u8>` of exactly the required size.
    pub fn encode<T: SshEncode>(x: &T) -> Option<Vec<u8>> {
        let mut buf = vec![0; Self::size(x)?];
        let mut e = RefEncoder::new(&mut buf);
        e.push(x)?;
        check(e.is_full())?;
        Some(buf)
    }

    /// Decode a structure from a byte slice.
    ///
    /// Fails unless the input is consumed completely.
    pub fn decode<'a, T: SshDecode<'a>>(x: &'a [u8]) -> Option<T> {
        let mut d = RefDecoder::new(x);
        let t = d.take()?;
        d.expect_eoi()?;
        Some(t)
    }
}
