//! Message stream controller: one socket, one message log, one send path.
//!
//! The controller is a synchronous reducer. The socket task feeds it
//! lifecycle events and raw frames in arrival order, and the UI asks it to
//! send text. Every mutation of the log happens here, so the rules below are
//! the whole client-side protocol contract:
//!
//! - `history` replaces the log wholesale, `message` appends one entry.
//! - Malformed or unknown frames are dropped with a warning.
//! - Sends need non-blank text and an open socket; otherwise they do nothing.
//! - `Closed` is terminal; the transport is closed exactly once, also on drop.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use frames::{CodecError, Inbound, Outbound};

use crate::net::transport::{Transport, TransportError};
use crate::state::chat::{ChatState, ConnectionState, SendOutcome};

/// What an inbound frame did to the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameEffect {
    /// History replaced the log; carries the new length.
    Replaced(usize),
    /// One message was appended.
    Appended,
    /// The connection is closed; the frame was discarded.
    Ignored,
}

/// Binds one [`Transport`] to one message log.
pub struct ChatController<T: Transport> {
    transport: T,
    state: ChatState,
}

impl<T: Transport> ChatController<T> {
    /// Start a controller for a connection that is still opening.
    pub fn new(transport: T) -> Self {
        Self { transport, state: ChatState::default() }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    #[cfg(test)]
    pub fn messages(&self) -> &[crate::state::chat::ChatMessage] {
        self.state.log.messages()
    }

    pub fn connection(&self) -> ConnectionState {
        self.state.connection
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// The socket reported it is ready.
    pub fn on_open(&mut self) {
        if self.state.connection == ConnectionState::Connecting {
            self.state.connection = ConnectionState::Open;
            leptos::logging::log!("chat socket connected");
        }
    }

    /// Apply one raw inbound text frame.
    ///
    /// # Errors
    ///
    /// Returns the [`CodecError`] for a frame that could not be decoded. The
    /// log is left untouched and the error has already been logged.
    pub fn on_frame(&mut self, raw: &str) -> Result<FrameEffect, CodecError> {
        if self.state.connection == ConnectionState::Closed {
            return Ok(FrameEffect::Ignored);
        }

        let frame = frames::decode_inbound(raw).inspect_err(|e| {
            leptos::logging::warn!("dropping chat frame: {e}");
        })?;

        Ok(match frame {
            Inbound::History(history) => {
                if !self.state.log.replace_history(history) {
                    leptos::logging::warn!("history received again; replacing message log");
                }
                FrameEffect::Replaced(self.state.log.len())
            }
            Inbound::Message(message) => {
                self.state.log.append(message);
                FrameEffect::Appended
            }
        })
    }

    /// The socket closed on its own (remote close, network drop, open failure).
    pub fn on_closed(&mut self) {
        if self.shut_down() {
            leptos::logging::log!("chat socket disconnected");
        }
    }

    /// The socket failed; treated the same as a close.
    pub fn on_transport_error(&mut self, error: &TransportError) {
        leptos::logging::warn!("chat transport error: {error}");
        self.shut_down();
    }

    /// Send `text` as a chat message if the preconditions hold.
    ///
    /// Whitespace is only checked, never stripped: the frame carries `text`
    /// exactly as typed.
    pub fn send(&mut self, text: &str) -> SendOutcome {
        if let Err(reason) = self.state.send_gate(text) {
            return SendOutcome::Skipped(reason);
        }

        let frame = frames::encode_outbound(&Outbound::Message(text.to_owned()));
        match self.transport.transmit(frame) {
            Ok(()) => SendOutcome::Sent,
            Err(e) => {
                self.on_transport_error(&e);
                SendOutcome::Failed
            }
        }
    }

    /// Close the connection. Later calls are no-ops.
    pub fn close(&mut self) {
        if self.shut_down() {
            leptos::logging::log!("chat socket closed by client");
        }
    }

    /// Move to `Closed`, closing the transport on the first call only.
    fn shut_down(&mut self) -> bool {
        if self.state.connection == ConnectionState::Closed {
            return false;
        }
        self.state.connection = ConnectionState::Closed;
        self.transport.close();
        true
    }
}

impl<T: Transport> Drop for ChatController<T> {
    fn drop(&mut self) {
        self.close();
    }
}
