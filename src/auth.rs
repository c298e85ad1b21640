mod algorithm;
mod identity;
mod key_manager;

pub mod ssh_ed25519;

pub use self::algorithm::*;
pub use self::identity::*;
pub use self::key_manager::*;
