use super::method::*;
use super::msg_userauth_request::*;
use crate::transport::Message;
use crate::transport::SessionId;
use crate::util::codec::*;

/// The data to be signed for a `publickey` authentication request (RFC 4252 section 7).
///
/// ```text
/// string    session identifier
/// byte      SSH_MSG_USERAUTH_REQUEST
/// string    user name
/// string    service name
/// string    "publickey"
/// boolean   TRUE
/// string    public key algorithm name
/// string    public key to be used for authentication
/// ```
///
/// Apart from the leading session identifier this is exactly the request that is sent,
/// without its signature field.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureData<'a> {
    pub session_id: &'a SessionId,
    pub user_name: &'a str,
    pub service_name: &'a str,
    pub algorithm: &'a str,
    pub key: &'a [u8],
}

impl<'a> SignatureData<'a> {
    /// The request carrying `signature` over this data.
    pub fn request<'b>(
        &'b self,
        signature: &'b [u8],
    ) -> MsgUserAuthRequest<'b, PublicKeyMethod<'b>> {
        MsgUserAuthRequest {
            user_name: self.user_name,
            service_name: self.service_name,
            method: PublicKeyMethod {
                algorithm: self.algorithm,
                key: self.key,
                signature: Some(signature),
            },
        }
    }
}

impl<'a> SshEncode for SignatureData<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push(self.session_id)?;
        e.push_u8(<MsgUserAuthRequest<PublicKeyMethod> as Message>::NUMBER)?;
        e.push_str_framed(self.user_name)?;
        e.push_str_framed(self.service_name)?;
        e.push_str_framed(<PublicKeyMethod as AuthMethod>::NAME)?;
        e.push_bool(true)?;
        e.push_str_framed(self.algorithm)?;
        e.push_bytes_framed(self.key)
    }
}
