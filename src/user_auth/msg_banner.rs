use crate::transport::Message;
use crate::util::codec::*;

/// `SSH_MSG_USERAUTH_BANNER`: A text the server wants displayed before authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MsgBanner<'a> {
    pub message: &'a str,
    pub language: &'a str,
}

impl<'a> Message for MsgBanner<'a> {
    const NUMBER: u8 = 53;
}

impl<'a> SshEncode for MsgBanner<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u8(<Self as Message>::NUMBER)?;
        e.push_str_framed(self.message)?;
        e.push_str_framed(self.language)
    }
}

impl<'a> SshDecode<'a> for MsgBanner<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_u8(<Self as Message>::NUMBER)?;
        let message = d.take_str_framed()?;
        let language = d.take_str_framed()?;
        Some(Self { message, language })
    }
}
