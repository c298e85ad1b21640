pub mod key_manager;
pub mod peer;
