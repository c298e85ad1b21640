use crate::transport::Message;
use crate::util::codec::*;

/// `SSH_MSG_USERAUTH_FAILURE`: The request has been rejected.
///
/// `methods` lists the authentication methods that can productively continue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgFailure<'a> {
    pub methods: Vec<&'a str>,
    pub partial_success: bool,
}

impl<'a> Message for MsgFailure<'a> {
    const NUMBER: u8 = 51;
}

impl<'a> SshEncode for MsgFailure<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u8(<Self as Message>::NUMBER)?;
        e.push_name_list(&self.methods)?;
        e.push_bool(self.partial_success)
    }
}

impl<'a> SshDecode<'a> for MsgFailure<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_u8(<Self as Message>::NUMBER)?;
        let methods = d.take_name_list()?;
        let partial_success = d.take_bool()?;
        Some(Self {
            methods,
            partial_success,
        })
    }
}
