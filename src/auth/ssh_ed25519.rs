use super::*;
use crate::util::codec::*;

use ed25519_dalek as ed25519;
use zeroize::Zeroize;

#[derive(Debug)]
pub struct SshEd25519 {}

impl SshEd25519 {
    pub const NAME: &'static str = SSH_ED25519;
}

/// The `ssh-ed25519` public key blob.
#[derive(PartialEq, Clone, Debug)]
pub struct SshEd25519PublicKey<'a>(pub &'a [u8; 32]);

impl<'a> SshEncode for SshEd25519PublicKey<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_str_framed(SshEd25519::NAME)?;
        e.push_bytes_framed(self.0)
    }
}

impl<'a> SshDecode<'a> for SshEd25519PublicKey<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_str_framed(SshEd25519::NAME)?;
        let bytes = d.take_bytes_framed()?;
        Some(Self(bytes.try_into().ok()?))
    }
}

/// The `ssh-ed25519` signature blob.
#[derive(PartialEq, Clone, Debug)]
pub struct SshEd25519Signature<'a>(pub &'a [u8; 64]);

impl<'a> SshEncode for SshEd25519Signature<'a> {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_str_framed(SshEd25519::NAME)?;
        e.push_bytes_framed(self.0)
    }
}

impl<'a> SshDecode<'a> for SshEd25519Signature<'a> {
    fn decode<D: SshDecoder<'a>>(d: &mut D) -> Option<Self> {
        d.expect_str_framed(SshEd25519::NAME)?;
        let bytes = d.take_bytes_framed()?;
        Some(Self(bytes.try_into().ok()?))
    }
}

/// A [KeyManager] holding `ssh-ed25519` private keys in memory.
///
/// Identities are offered in the order they have been added.
#[derive(Default)]
pub struct Ed25519Keyring {
    keys: Vec<(Identity, String, ed25519::Keypair)>,
}

impl Ed25519Keyring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a private key given by its 32 byte seed.
    ///
    /// The seed is zeroized after the key has been derived from it.
    pub fn add(&mut self, mut seed: [u8; 32], comment: &str) -> Result<Identity, SignError> {
        let secret = ed25519::SecretKey::from_bytes(&seed);
        seed.zeroize();
        let secret = secret.map_err(|_| SignError::InvalidKey)?;
        let public = ed25519::PublicKey::from(&secret);
        let blob = SshCodec::encode(&SshEd25519PublicKey(public.as_bytes()));
        let identity = Identity::from(blob.ok_or(SignError::InvalidKey)?);
        let keypair = ed25519::Keypair { secret, public };
        self.keys.push((identity.clone(), comment.into(), keypair));
        Ok(identity)
    }

    fn sign_blob(&self, id: &Identity, algorithm: &str, data: &[u8]) -> KeyManagerResult<Vec<u8>> {
        use ed25519_dalek::Signer;
        if algorithm != SshEd25519::NAME {
            return Err(SignError::UnsupportedAlgorithm(algorithm.into()).into());
        }
        let (_, _, keypair) = self
            .keys
            .iter()
            .find(|(x, _, _)| x == id)
            .ok_or(SignError::UnknownIdentity)?;
        let signature = keypair.sign(data).to_bytes();
        let blob = SshCodec::encode(&SshEd25519Signature(&signature));
        Ok(blob.ok_or(SignError::InvalidKey)?)
    }
}

impl KeyManager for Ed25519Keyring {
    fn identities(&self) -> KeyManagerFuture<Vec<(Identity, String)>> {
        let ids = self.keys.iter().map(|(i, c, _)| (i.clone(), c.clone())).collect();
        Box::pin(async move { Ok(ids) })
    }

    fn sign(&self, id: &Identity, algorithm: &str, data: &[u8]) -> KeyManagerFuture<Vec<u8>> {
        let r = self.sign_blob(id, algorithm, data);
        Box::pin(async move { r })
    }
}

impl std::fmt::Debug for Ed25519Keyring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<_> = self.keys.iter().map(|(i, c, _)| (i.fingerprint(), c)).collect();
        f.debug_struct("Ed25519Keyring").field("keys", &ids).finish()
    }
}
