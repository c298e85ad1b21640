use crate::transport::Message;
use crate::util::codec::*;

/// `SSH_MSG_USERAUTH_SUCCESS`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgSuccess;

impl Message for MsgSuccess {
    const NUMBER: u8 = 52;
}

impl SshEncode for MsgSuccess {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u8(<Self as Message>::NUMBER)
    }
}

impl<'a> SshDecode<'a> for MsgSuccess {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_u8(<Self as Message>::NUMBER)?;
        Some(Self)
    }
}
