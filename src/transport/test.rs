use super::SessionId;
use super::Transport;
use super::TransportError;
use std::collections::VecDeque;
use std::task::{ready, Context, Poll};
use tokio::sync::mpsc;

/// An in-memory [Transport] pair for testing.
///
/// Each message committed on one end is received as one message on the other end.
/// Dropping one end causes the other end to fail with [TransportError::DisconnectByPeer].
#[derive(Debug)]
pub struct TestTransport {
    session_id: SessionId,
    tx: mpsc::UnboundedSender<Vec<u8>>,
    tx_buf: Option<Vec<u8>>,
    tx_queue: VecDeque<Vec<u8>>,
    rx: mpsc::UnboundedReceiver<Vec<u8>>,
    rx_head: Option<Vec<u8>>,
}

impl TestTransport {
    pub fn new(session_id: SessionId) -> (Self, Self) {
        let (s1, r1) = mpsc::unbounded_channel();
        let (s2, r2) = mpsc::unbounded_channel();
        let self1 = Self {
            session_id: session_id.clone(),
            tx: s1,
            tx_buf: None,
            tx_queue: VecDeque::new(),
            rx: r2,
            rx_head: None,
        };
        let self2 = Self {
            session_id,
            tx: s2,
            tx_buf: None,
            tx_queue: VecDeque::new(),
            rx: r1,
            rx_head: None,
        };
        (self1, self2)
    }
}

impl Transport for TestTransport {
    fn rx_peek(&mut self, cx: &mut Context) -> Poll<Result<&[u8], TransportError>> {
        if self.rx_head.is_none() {
            match ready!(self.rx.poll_recv(cx)) {
                Some(x) => self.rx_head = Some(x),
                None => return Poll::Ready(Err(TransportError::DisconnectByPeer)),
            }
        }
        Poll::Ready(self.rx_head.as_deref().ok_or(TransportError::InvalidState))
    }

    fn rx_consume(&mut self) -> Result<(), TransportError> {
        self.rx_head.take().map(drop).ok_or(TransportError::InvalidState)
    }

    fn tx_alloc(
        &mut self,
        _cx: &mut Context,
        len: usize,
    ) -> Poll<Result<&mut [u8], TransportError>> {
        if self.tx_buf.is_some() {
            return Poll::Ready(Err(TransportError::InvalidState));
        }
        self.tx_buf = Some(vec![0; len]);
        Poll::Ready(self.tx_buf.as_deref_mut().ok_or(TransportError::InvalidState))
    }

    fn tx_commit(&mut self) -> Result<(), TransportError> {
        let buf = self.tx_buf.take().ok_or(TransportError::InvalidState)?;
        self.tx_queue.push_back(buf);
        Ok(())
    }

    fn tx_flush(&mut self, _cx: &mut Context) -> Poll<Result<(), TransportError>> {
        while let Some(v) = self.tx_queue.pop_front() {
            let e = TransportError::DisconnectByPeer;
            self.tx.send(v).map_err(|_| e)?;
        }
        Poll::Ready(Ok(()))
    }

    fn session_id(&self) -> Result<&SessionId, TransportError> {
        Ok(&self.session_id)
    }
}
