pub mod auth;
pub mod transport;
pub mod user_auth;
pub mod util;

pub use self::auth::ssh_ed25519::Ed25519Keyring;
pub use self::auth::{Identity, KeyManager, KeyManagerError, SignError};
pub use self::transport::{SessionId, Transport, TransportError};
pub use self::user_auth::{PublicKeyAuth, UserAuth, UserAuthConfig, UserAuthError};
