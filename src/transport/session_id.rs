use crate::util::codec::*;

/// The session identifier is the exchange hash of the first key exchange.
///
/// Its length depends on the hash function of the key exchange algorithm, so it is treated
/// as opaque bytes. It never changes for the lifetime of a connection.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionId(Vec<u8>);

impl SessionId {
    pub fn new<T: Into<Vec<u8>>>(x: T) -> Self {
        Self(x.into())
    }
}

impl AsRef<[u8]> for SessionId {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl SshEncode for SessionId {
    fn encode<E: SshEncoder>(&self, e: &mut E) -> Option<()> {
        e.push_bytes_framed(&self.0)
    }
}

impl std::fmt::Debug for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionId(")?;
        for i in &self.0 {
            write!(f, "{:02x}", i)?;
        }
        write!(f, ")")
    }
}
