//! Transport seam between the chat controller and a socket.
//!
//! The controller only needs two things from a connection: hand it an encoded
//! text frame, and shut it down. Everything asynchronous (opening the socket,
//! reading frames, writing bytes) lives outside this trait so the controller
//! stays a synchronous reducer that tests can drive directly.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::collections::VecDeque;

/// Failure reported by a [`Transport`] or the socket behind it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The transport was already closed.
    #[error("transport is closed")]
    Closed,
    /// The socket could not be opened.
    #[error("failed to open socket: {0}")]
    Open(String),
    /// The socket failed while connected.
    #[error("socket error: {0}")]
    Socket(String),
}

/// Outbound half of one connection, owned by a single controller.
pub trait Transport {
    /// Queue one encoded text frame for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the frame cannot be delivered.
    fn transmit(&mut self, frame: String) -> Result<(), TransportError>;

    /// Terminate the connection. No graceful drain.
    fn close(&mut self);
}

/// Transport that buffers frames for an async writer to drain.
///
/// The browser socket task owns one of these inside its controller and, after
/// each event, writes whatever the controller queued.
#[derive(Debug, Default)]
pub struct OutboxTransport {
    outbox: VecDeque<String>,
    closed: bool,
}

impl OutboxTransport {
    /// Take every queued frame in transmit order.
    pub fn drain(&mut self) -> impl Iterator<Item = String> + '_ {
        self.outbox.drain(..)
    }
}

impl Transport for OutboxTransport {
    fn transmit(&mut self, frame: String) -> Result<(), TransportError> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.outbox.push_back(frame);
        Ok(())
    }

    fn close(&mut self) {
        self.closed = true;
        self.outbox.clear();
    }
}
