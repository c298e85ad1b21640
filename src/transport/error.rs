use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    DisconnectByPeer,
    InvalidEncoding,
    InvalidState,
    InvalidServiceAccept(String),
}

impl Error for TransportError {}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DisconnectByPeer => write!(f, "Disconnect by peer"),
            Self::InvalidEncoding => write!(f, "Invalid encoding"),
            Self::InvalidState => write!(f, "Invalid state (protocol error)"),
            Self::InvalidServiceAccept(x) => write!(f, "Invalid service accept: {}", x),
        }
    }
}
