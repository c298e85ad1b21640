use crate::util::codec::*;

pub trait AuthMethod {
    const NAME: &'static str;
}

/// The method-specific part of a `publickey` authentication request (RFC 4252 section 7).
///
/// Without signature this only asks whether the key would be acceptable.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKeyMethod<'a> {
    pub algorithm: &'a str,
    pub key: &'a [u8],
    pub signature: Option<&'a [u8]>,
}

impl<'a> AuthMethod for PublicKeyMethod<'a> {
    const NAME: &'static str = "publickey";
}

impl<'a> SshEncode for PublicKeyMethod<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_bool(self.signature.is_some())?;
        e.push_str_framed(self.algorithm)?;
        e.push_bytes_framed(self.key)?;
        match self.signature {
            None => Some(()),
            Some(x) => e.push_bytes_framed(x),
        }
    }
}

impl<'a> SshDecode<'a> for PublicKeyMethod<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        let has_signature = d.take_bool()?;
        let algorithm = d.take_str_framed()?;
        let key = d.take_bytes_framed()?;
        let signature = if has_signature {
            Some(d.take_bytes_framed()?)
        } else {
            None
        };
        Some(Self {
            algorithm,
            key,
            signature,
        })
    }
}
