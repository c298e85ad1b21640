use crate::auth::KeyManagerError;
use crate::transport::TransportError;

use std::error::Error;

#[derive(Clone, Debug)]
pub enum UserAuthError {
    /// The peer rejected a signed request and no longer lists `publickey` as method that can
    /// continue.
    DisallowedMethod,
    /// The key manager failed to sign for an identity it offered.
    SigningFailure(KeyManagerError),
    /// The key manager failed to list its identities.
    KeyManagerError(KeyManagerError),
    ProtocolError(ProtocolError),
    TransportError(TransportError),
    NoMoreAuthMethods,
}

impl From<ProtocolError> for UserAuthError {
    fn from(e: ProtocolError) -> Self {
        Self::ProtocolError(e)
    }
}

impl From<TransportError> for UserAuthError {
    fn from(e: TransportError) -> Self {
        Self::TransportError(e)
    }
}

impl Error for UserAuthError {}

impl std::fmt::Display for UserAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DisallowedMethod => write!(f, "Method publickey disallowed by peer"),
            Self::SigningFailure(e) => write!(f, "Signing failed: {}", e),
            Self::KeyManagerError(e) => write!(f, "Key manager: {}", e),
            Self::ProtocolError(e) => write!(f, "Protocol: {}", e),
            Self::TransportError(e) => write!(f, "Transport: {}", e),
            Self::NoMoreAuthMethods => write!(f, "No more auth methods"),
        }
    }
}

/// The peer sent a response that is invalid in the current round.
///
/// The message number of the offending message is recorded (if there was one).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    UnexpectedResponseToQuery(Option<u8>),
    UnexpectedResponseToSignature(Option<u8>),
    /// `SSH_MSG_USERAUTH_PK_OK` for another algorithm or key than the one offered.
    MismatchedKeyOk,
}

impl Error for ProtocolError {}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedResponseToQuery(Some(n)) => {
                write!(f, "Unexpected message {} in response to query", n)
            }
            Self::UnexpectedResponseToSignature(Some(n)) => {
                write!(f, "Unexpected message {} in response to signature", n)
            }
            Self::UnexpectedResponseToQuery(None) | Self::UnexpectedResponseToSignature(None) => {
                write!(f, "Empty message")
            }
            Self::MismatchedKeyOk => write!(f, "Key accepted does not match key offered"),
        }
    }
}
