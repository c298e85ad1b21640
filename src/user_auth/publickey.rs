use super::*;
use crate::auth::*;
use crate::transport::*;
use crate::util::codec::*;

use std::sync::Arc;

/// The peer's answer to a key offered without signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Query {
    Rejected,
    KeyOk,
    /// Authenticated without signature.
    Accepted,
}

/// The `publickey` method of user authentication (RFC 4252 section 7).
///
/// Identities are taken from the key manager and offered one after the other. Each identity
/// is offered with every compatible algorithm from the configuration (see
/// [candidate_algorithms]). A signature is only requested from the key manager after the peer
/// confirmed that key and algorithm would be acceptable.
#[derive(Debug)]
pub struct PublicKeyAuth {
    config: Arc<UserAuthConfig>,
    key_manager: Option<Arc<dyn KeyManager>>,
}

impl PublicKeyAuth {
    pub fn new(config: Arc<UserAuthConfig>, key_manager: Option<Arc<dyn KeyManager>>) -> Self {
        Self {
            config,
            key_manager,
        }
    }

    /// Authenticate `user_name` for `service_name`.
    ///
    /// Returns `true` as soon as the peer accepts a signed request and `false` if all
    /// identities have been rejected. Fails with [UserAuthError::DisallowedMethod] if the peer
    /// rejects a signed request and does not allow to continue with `publickey` at all.
    pub async fn authenticate<T: Transport>(
        &self,
        t: &mut T,
        service_name: &str,
        user_name: &str,
    ) -> Result<bool, UserAuthError> {
        let km = match self.key_manager {
            Some(ref km) => km,
            None => {
                log::debug!("No key manager: Skipping publickey authentication");
                return Ok(false);
            }
        };
        let identities = km
            .identities()
            .await
            .map_err(UserAuthError::KeyManagerError)?;
        if identities.is_empty() {
            log::debug!("No identities: Skipping publickey authentication");
            return Ok(false);
        }
        let session_id = t.session_id()?.clone();
        let mut attempted: Vec<(&[u8], &str)> = Vec::new();
        for (identity, comment) in &identities {
            let key_type = identity.algorithm();
            if key_type.is_empty() {
                log::warn!("Skipping identity with malformed key: {}", comment);
                continue;
            }
            log::debug!(
                "Offering identity {} {} ({})",
                key_type,
                identity.fingerprint(),
                comment
            );
            for algorithm in candidate_algorithms(&self.config.publickey_algorithms, identity) {
                let key = identity.as_ref();
                if attempted.contains(&(key, algorithm)) {
                    log::debug!("Key already offered with {}", algorithm);
                    continue;
                }
                attempted.push((key, algorithm));
                let data = SignatureData {
                    session_id: &session_id,
                    user_name,
                    service_name,
                    algorithm,
                    key,
                };
                if Self::offer(t, &**km, identity, &data).await? {
                    log::info!("Authenticated as {} with {} key", user_name, algorithm);
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Offer one identity with one algorithm.
    ///
    /// The key is first offered without signature. Only if the peer confirms it with
    /// `SSH_MSG_USERAUTH_PK_OK` is a signature requested and sent.
    ///
    /// Returns `false` if the peer rejected it and the next one shall be tried.
    async fn offer<T: Transport>(
        t: &mut T,
        km: &dyn KeyManager,
        identity: &Identity,
        data: &SignatureData<'_>,
    ) -> Result<bool, UserAuthError> {
        match Self::query(t, data).await? {
            Query::Rejected => return Ok(false),
            Query::Accepted => return Ok(true),
            Query::KeyOk => (),
        }
        let buf = SshCodec::encode(data).ok_or(TransportError::InvalidEncoding)?;
        let signature = km
            .sign(identity, data.algorithm, &buf)
            .await
            .map_err(UserAuthError::SigningFailure)?;
        TransportExt::send(t, &data.request(&signature)).await?;
        TransportExt::flush(t).await?;
        let msg = Self::receive(t).await?;
        match Verdict::decode(&msg) {
            Some(Verdict::Accepted) => Ok(true),
            Some(v @ Verdict::Continue { .. }) => {
                if let Verdict::Continue {
                    partial_success: true,
                    ref methods,
                } = v
                {
                    log::info!("Partial success, continue with {:?}", methods);
                }
                if v.can_continue(<PublicKeyMethod as AuthMethod>::NAME) {
                    log::debug!("Signature with {} rejected", data.algorithm);
                    Ok(false)
                } else {
                    log::warn!("Method publickey disallowed by peer");
                    Err(UserAuthError::DisallowedMethod)
                }
            }
            _ => {
                let n = msg.first().copied();
                Err(ProtocolError::UnexpectedResponseToSignature(n).into())
            }
        }
    }

    /// Ask whether the peer would accept key and algorithm (request without signature).
    async fn query<T: Transport>(
        t: &mut T,
        data: &SignatureData<'_>,
    ) -> Result<Query, UserAuthError> {
        let msg = MsgUserAuthRequest {
            user_name: data.user_name,
            service_name: data.service_name,
            method: PublicKeyMethod {
                algorithm: data.algorithm,
                key: data.key,
                signature: None,
            },
        };
        TransportExt::send(t, &msg).await?;
        TransportExt::flush(t).await?;
        let msg = Self::receive(t).await?;
        match Verdict::decode(&msg) {
            Some(Verdict::KeyOk { algorithm, key }) => {
                if algorithm != data.algorithm || key != data.key {
                    return Err(ProtocolError::MismatchedKeyOk.into());
                }
                log::debug!("Key acceptable with {}", algorithm);
                Ok(Query::KeyOk)
            }
            Some(Verdict::Continue { .. }) => {
                log::debug!("Key not acceptable with {}", data.algorithm);
                Ok(Query::Rejected)
            }
            Some(Verdict::Accepted) => Ok(Query::Accepted),
            None => {
                let n = msg.first().copied();
                Err(ProtocolError::UnexpectedResponseToQuery(n).into())
            }
        }
    }

    /// Receive the next response while logging and skipping banners.
    async fn receive<T: Transport>(t: &mut T) -> Result<Vec<u8>, UserAuthError> {
        loop {
            let msg = TransportExt::receive(t).await?;
            if let Some(banner) = SshCodec::decode::<MsgBanner>(&msg) {
                log::info!("Banner: {}", banner.message);
                continue;
            }
            return Ok(msg);
        }
    }
}
