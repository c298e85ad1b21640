use super::Message;
use crate::util::codec::*;

#[derive(Clone, Debug, PartialEq)]
pub struct MsgServiceAccept<'a>(pub &'a str);

impl<'a> Message for MsgServiceAccept<'a> {
    const NUMBER: u8 = 6;
}

impl<'a> SshEncode for MsgServiceAccept<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_u8(<Self as Message>::NUMBER)?;
        e.push_str_framed(self.0)
    }
}

impl<'a> SshDecode<'a> for MsgServiceAccept<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_u8(<Self as Message>::NUMBER)?;
        Some(Self(d.take_str_framed()?))
    }
}
