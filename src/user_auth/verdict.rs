use super::msg_failure::*;
use super::msg_pk_ok::*;
use super::msg_success::*;
use crate::util::codec::*;

/// The meaning of the peer's response to an authentication request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict<'a> {
    /// `SSH_MSG_USERAUTH_SUCCESS`
    Accepted,
    /// `SSH_MSG_USERAUTH_FAILURE`
    Continue {
        methods: Vec<&'a str>,
        partial_success: bool,
    },
    /// `SSH_MSG_USERAUTH_PK_OK`
    KeyOk { algorithm: &'a str, key: &'a [u8] },
}

impl<'a> Verdict<'a> {
    /// Interpret a message payload.
    ///
    /// Returns `None` for any other message and for malformed ones.
    pub fn decode(buf: &'a [u8]) -> Option<Self> {
        if let Some(MsgSuccess) = SshCodec::decode(buf) {
            return Some(Self::Accepted);
        }
        if let Some(x) = SshCodec::decode::<MsgFailure>(buf) {
            return Some(Self::Continue {
                methods: x.methods,
                partial_success: x.partial_success,
            });
        }
        let x: MsgPkOk = SshCodec::decode(buf)?;
        Some(Self::KeyOk {
            algorithm: x.algorithm,
            key: x.key,
        })
    }

    /// Whether the peer allows to continue with the given method.
    pub fn can_continue(&self, method: &str) -> bool {
        match self {
            Self::Continue { methods, .. } => methods.iter().any(|x| *x == method),
            _ => false,
        }
    }
}
