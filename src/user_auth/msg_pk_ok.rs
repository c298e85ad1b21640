use crate::transport::Message;
use crate::util::codec::*;

/// `SSH_MSG_USERAUTH_PK_OK`: The key offered without signature would be acceptable.
///
/// It repeats algorithm name and key blob from the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgPkOk<'a> {
    pub algorithm: &'a str,
    pub key: &'a [u8],
}

impl<'a> Message for MsgPkOk<'a> {
    const NUMBER: u8 = 60;
}

impl<'a> SshEncode for MsgPkOk<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u8(<Self as Message>::NUMBER)?;
        e.push_str_framed(self.algorithm)?;
        e.push_bytes_framed(self.key)
    }
}

impl<'a> SshDecode<'a> for MsgPkOk<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_u8(<Self as Message>::NUMBER)?;
        let algorithm = d.take_str_framed()?;
        let key = d.take_bytes_framed()?;
        Some(Self { algorithm, key })
    }
}
