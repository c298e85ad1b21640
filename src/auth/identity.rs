use crate::util::codec::*;
use sha2::{Digest, Sha256};

/// A user identity.
///
/// This is either just a public key or a certificate. The identity is kept in its wire
/// encoding (the key blob): comparison and transmission always happen on the exact bytes
/// supplied by the key manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity(Vec<u8>);

impl Identity {
    const CERT_SUFFIX: &'static str = "-cert-v01@openssh.com";

    /// The key type as encoded at the start of the blob (like `ssh-ed25519`).
    ///
    /// Returns the empty string if the blob is malformed.
    pub fn algorithm(&self) -> &str {
        let mut d = RefDecoder::new(&self.0);
        d.take_str_framed().unwrap_or("")
    }

    pub fn is_certificate(&self) -> bool {
        self.algorithm().ends_with(Self::CERT_SUFFIX)
    }

    /// The SHA-256 fingerprint as displayed by OpenSSH (`SHA256:` and unpadded base64).
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(&self.0);
        format!(
            "SHA256:{}",
            base64::encode_config(digest, base64::STANDARD_NO_PAD)
        )
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Identity {
    fn from(x: Vec<u8>) -> Self {
        Self(x)
    }
}
