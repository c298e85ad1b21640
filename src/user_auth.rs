mod config;
mod error;
mod method;
mod msg_banner;
mod msg_failure;
mod msg_pk_ok;
mod msg_success;
mod msg_userauth_request;
mod publickey;
mod signature_data;
mod verdict;

pub use self::config::*;
pub use self::error::*;
pub use self::method::*;
pub use self::msg_banner::*;
pub use self::msg_failure::*;
pub use self::msg_pk_ok::*;
pub use self::msg_success::*;
pub use self::msg_userauth_request::*;
pub use self::publickey::*;
pub use self::signature_data::*;
pub use self::verdict::*;

use crate::auth::KeyManager;
use crate::transport::*;

use std::sync::Arc;

/// The `ssh-userauth` service negotiates and performs methods of user authentication between
/// client and server as described in RFC 4252.
///
/// The service is a short-lived proxy that is only used to lift other services into an
/// authenticated context.
pub struct UserAuth;

impl UserAuth {
    pub const NAME: &'static str = "ssh-userauth";

    /// Request the `ssh-userauth` service and authenticate for `service_name` with the
    /// identities of `key_manager`.
    ///
    /// Fails with [UserAuthError::NoMoreAuthMethods] if no identity has been accepted.
    pub async fn request<T: Transport>(
        t: &mut T,
        config: &Arc<UserAuthConfig>,
        service_name: &str,
        user_name: &str,
        key_manager: Option<Arc<dyn KeyManager>>,
    ) -> Result<(), UserAuthError> {
        TransportExt::request_service(t, Self::NAME).await?;
        let method = PublicKeyAuth::new(config.clone(), key_manager);
        if method.authenticate(t, service_name, user_name).await? {
            Ok(())
        } else {
            Err(UserAuthError::NoMoreAuthMethods)
        }
    }
}
