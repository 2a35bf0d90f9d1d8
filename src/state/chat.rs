//! Chat stream state: the message log and the connection lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatState` is the snapshot the presentation layer renders. Only the
//! message stream controller mutates it; components read it through a
//! `RwSignal<ChatState>` context and never write the log directly.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub use frames::ChatMessage;

/// Ordered, append-only record of chat messages for one connection.
///
/// The only non-append mutation is [`MessageLog::replace_history`], which
/// the server triggers once after connecting.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    history_received: bool,
}

impl MessageLog {
    /// Replace the whole log with `history`, keeping the given order.
    ///
    /// Returns `true` when this is the first history delivered to the log.
    pub fn replace_history(&mut self, history: Vec<ChatMessage>) -> bool {
        self.messages = history;
        !std::mem::replace(&mut self.history_received, true)
    }

    /// Append one message at the end of the log.
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// WebSocket connection lifecycle. `Closed` is terminal for a controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// Socket handshake is in progress.
    #[default]
    Connecting,
    /// Socket is ready; sends are allowed.
    Open,
    /// Socket was closed by either side or failed to open.
    Closed,
}

impl ConnectionState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connecting => "Connecting",
            Self::Open => "Connected",
            Self::Closed => "Disconnected",
        }
    }
}

/// Why a send request was dropped without touching the socket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Text is empty or whitespace only.
    EmptyText,
    /// Socket is not open.
    NotOpen(ConnectionState),
}

/// Result of a send request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Frame was handed to the transport; the draft should be cleared.
    Sent,
    /// Preconditions failed; nothing happened.
    Skipped(SkipReason),
    /// The transport rejected the frame and the connection is now closed.
    Failed,
}

impl SendOutcome {
    /// Whether the presentation layer should clear its draft.
    pub fn clears_draft(self) -> bool {
        self == Self::Sent
    }
}

/// Snapshot of one chat session: its log and connection state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub log: MessageLog,
    pub connection: ConnectionState,
}

impl ChatState {
    /// Check the send preconditions for `text`.
    ///
    /// Trimming only decides eligibility; callers still send `text` as is.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when `text` is blank or the socket is not open.
    pub fn send_gate(&self, text: &str) -> Result<(), SkipReason> {
        if text.trim().is_empty() {
            return Err(SkipReason::EmptyText);
        }
        if self.connection != ConnectionState::Open {
            return Err(SkipReason::NotOpen(self.connection));
        }
        Ok(())
    }

    pub fn can_send(&self, text: &str) -> bool {
        self.send_gate(text).is_ok()
    }
}
