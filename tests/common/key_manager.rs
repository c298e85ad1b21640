use shellfish_userauth::auth::*;
use shellfish_userauth::util::codec::*;
use std::sync::{Arc, Mutex};

/// A sign request as seen by the key manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignCall {
    pub identity: Identity,
    pub algorithm: String,
    pub data: Vec<u8>,
}

/// A fake key blob of the given type.
pub fn identity(key_type: &str, key: &str) -> Identity {
    Identity::from(SshCodec::encode(&(key_type, key)).unwrap())
}

/// The signature blob [KeyManagerForTesting] produces for the key with `comment`.
pub fn signature(algorithm: &str, comment: &str) -> Vec<u8> {
    SshCodec::encode(&(algorithm, comment)).unwrap()
}

#[derive(Debug, Default)]
pub struct KeyManagerForTesting {
    identities: Vec<(Identity, String)>,
    calls: Arc<Mutex<Vec<SignCall>>>,
    is_unable_to_sign: bool,
    is_broken: bool,
}

impl KeyManagerForTesting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identity of type `key_type`. The comment doubles as key material.
    pub fn with_identity(mut self, key_type: &str, comment: &str) -> Self {
        self.identities.push((identity(key_type, comment), comment.into()));
        self
    }

    pub fn unable_to_sign(mut self) -> Self {
        self.is_unable_to_sign = true;
        self
    }

    pub fn broken(mut self) -> Self {
        self.is_broken = true;
        self
    }

    pub fn calls(&self) -> Arc<Mutex<Vec<SignCall>>> {
        self.calls.clone()
    }
}

impl KeyManager for KeyManagerForTesting {
    fn identities(&self) -> KeyManagerFuture<Vec<(Identity, String)>> {
        let r: KeyManagerResult<_> = if self.is_broken {
            Err(SignError::InvalidKey.into())
        } else {
            Ok(self.identities.clone())
        };
        Box::pin(async move { r })
    }

    fn sign(&self, id: &Identity, algorithm: &str, data: &[u8]) -> KeyManagerFuture<Vec<u8>> {
        self.calls.lock().unwrap().push(SignCall {
            identity: id.clone(),
            algorithm: algorithm.into(),
            data: data.into(),
        });
        let r: KeyManagerResult<_> = if self.is_unable_to_sign {
            Err(SignError::InvalidKey.into())
        } else {
            match self.identities.iter().find(|(i, _)| i == id) {
                Some((_, comment)) => Ok(signature(algorithm, comment)),
                None => Err(SignError::UnknownIdentity.into()),
            }
        };
        Box::pin(async move { r })
    }
}
