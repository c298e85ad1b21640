mod error;
mod msg_service_accept;
mod msg_service_request;
mod session_id;
mod test;

pub use self::error::*;
pub use self::msg_service_accept::*;
pub use self::msg_service_request::*;
pub use self::session_id::*;
pub use self::test::*;

use crate::util::codec::*;

use std::future::poll_fn;
use std::task::{ready, Context, Poll};

/// A message with a message number as defined in RFC 4250.
pub trait Message {
    const NUMBER: u8;
}

/// The interface the user authentication layer requires from an established transport.
///
/// All message payloads are already decrypted and unframed. The transport is a single
/// sequential channel: at most one inbound message is peeked at a time and outbound messages
/// are committed in order.
pub trait Transport: std::fmt::Debug + Send + Unpin + 'static {
    /// Wait for the next inbound message and return a reference to its payload.
    ///
    /// The message stays available until [rx_consume](Self::rx_consume) is called.
    fn rx_peek(&mut self, cx: &mut Context) -> Poll<Result<&[u8], TransportError>>;
    /// Discard the message returned by the last call to [rx_peek](Self::rx_peek).
    fn rx_consume(&mut self) -> Result<(), TransportError>;
    /// Allocate an outbound buffer of exactly `len` bytes for the next message.
    fn tx_alloc(&mut self, cx: &mut Context, len: usize)
        -> Poll<Result<&mut [u8], TransportError>>;
    /// Commit the buffer returned by the last call to [tx_alloc](Self::tx_alloc).
    fn tx_commit(&mut self) -> Result<(), TransportError>;
    /// Flush all committed messages.
    fn tx_flush(&mut self, cx: &mut Context) -> Poll<Result<(), TransportError>>;
    /// The session identifier (exchange hash of the first key exchange).
    fn session_id(&self) -> Result<&SessionId, TransportError>;
}

/// Async convenience operations on top of any [Transport].
pub struct TransportExt;

impl TransportExt {
    /// Encode and commit a message (without flushing).
    pub async fn send<T: Transport, M: SshEncode>(t: &mut T, msg: &M) -> Result<(), TransportError> {
        let size = SshCodec::size(msg).ok_or(TransportError::InvalidEncoding)?;
        poll_fn(|cx| -> Poll<Result<(), TransportError>> {
            let buf = ready!(t.tx_alloc(cx, size))?;
            let mut e = RefEncoder::new(buf);
            e.push(msg).ok_or(TransportError::InvalidEncoding)?;
            Poll::Ready(Ok(()))
        })
        .await?;
        t.tx_commit()
    }

    /// Flush all committed messages.
    pub async fn flush<T: Transport>(t: &mut T) -> Result<(), TransportError> {
        poll_fn(|cx| t.tx_flush(cx)).await
    }

    /// Wait for the next inbound message and take ownership of its payload.
    pub async fn receive<T: Transport>(t: &mut T) -> Result<Vec<u8>, TransportError> {
        let msg = poll_fn(|cx| t.rx_peek(cx).map_ok(|x| x.to_vec())).await?;
        t.rx_consume()?;
        Ok(msg)
    }

    /// Request a service from the peer and wait for its acceptance.
    pub async fn request_service<T: Transport>(
        t: &mut T,
        service_name: &str,
    ) -> Result<(), TransportError> {
        Self::send(t, &MsgServiceRequest(service_name)).await?;
        Self::flush(t).await?;
        let msg = Self::receive(t).await?;
        let accept: MsgServiceAccept = SshCodec::decode(&msg).ok_or(TransportError::InvalidState)?;
        if accept.0 != service_name {
            return Err(TransportError::InvalidServiceAccept(accept.0.into()));
        }
        log::debug!("Service {} accepted", service_name);
        Ok(())
    }
}
