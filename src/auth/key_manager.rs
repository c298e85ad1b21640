use super::*;
use crate::util::*;

use std::sync::Arc;

pub type KeyManagerError = ArcError;
pub type KeyManagerResult<T> = Result<T, KeyManagerError>;
pub type KeyManagerFuture<T> = BoxFuture<KeyManagerResult<T>>;

/// The source of identities and signatures for publickey authentication.
///
/// The private keys may live in memory, in an agent or on a hardware token: the caller only
/// sees public key blobs and finished signature blobs.
pub trait KeyManager: std::fmt::Debug + Send + Sync + 'static {
    /// List the available identities (with comment) in the order they shall be offered.
    fn identities(&self) -> KeyManagerFuture<Vec<(Identity, String)>>;
    /// Sign `data` with the private key belonging to `id` using the signature `algorithm`.
    ///
    /// Returns the encoded signature blob (algorithm name and signature as framed strings).
    fn sign(&self, id: &Identity, algorithm: &str, data: &[u8]) -> KeyManagerFuture<Vec<u8>>;
}

/// The unit key manager neither offers identities nor will it sign anything.
impl KeyManager for () {
    fn identities(&self) -> KeyManagerFuture<Vec<(Identity, String)>> {
        Box::pin(async { Ok(vec![]) })
    }

    fn sign(&self, _: &Identity, _: &str, _: &[u8]) -> KeyManagerFuture<Vec<u8>> {
        let e = KeyManagerError::from(SignError::UnknownIdentity);
        Box::pin(async move { Err(e) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    InvalidKey,
    UnknownIdentity,
    UnsupportedAlgorithm(String),
}

impl std::error::Error for SignError {}

impl std::fmt::Display for SignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "Invalid key"),
            Self::UnknownIdentity => write!(f, "Unknown identity"),
            Self::UnsupportedAlgorithm(x) => write!(f, "Unsupported algorithm: {}", x),
        }
    }
}

impl From<SignError> for KeyManagerError {
    fn from(e: SignError) -> Self {
        Arc::new(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unit_identities_01() {
        let km: Arc<dyn KeyManager> = Arc::new(());
        assert!(km.identities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unit_sign_01() {
        let km: Arc<dyn KeyManager> = Arc::new(());
        let id = Identity::from(vec![]);
        let e = km.sign(&id, "ssh-ed25519", b"data").await.unwrap_err();
        assert_eq!(e.to_string(), "Unknown identity");
    }
}
