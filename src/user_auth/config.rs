use crate::auth::PUBLICKEY_ALGORITHMS;

#[derive(Clone, Debug)]
pub struct UserAuthConfig {
    /// List of public key algorithms to be offered in order of preference.
    ///
    /// Each identity is offered with those algorithms compatible with its key type (RSA keys
    /// may use `rsa-sha2-512` and `rsa-sha2-256`). If none is compatible, the identity is
    /// offered with its own key type.
    ///
    /// Defaults to Ed25519 (certificate first), RSA with SHA-2 (certificate first), ECDSA and
    /// `ssh-rsa`.
    pub publickey_algorithms: Vec<&'static str>,
}

impl Default for UserAuthConfig {
    fn default() -> Self {
        Self {
            publickey_algorithms: PUBLICKEY_ALGORITHMS.to_vec(),
        }
    }
}
