//! Shared frame model and JSON codec for the chat socket.
//!
//! This crate owns the wire representation of the two frame shapes the chat
//! server speaks. Frames travel as WebSocket text messages of the form
//! `{"type": <tag>, "data": <payload>}`.
//!
//! PROTOCOL NOTES
//! ==============
//! The `message` tag is asymmetric: inbound its payload is a bare string that
//! the client stores as `{"data": <text>}`, and outbound it is a bare string
//! again. History entries are always objects carrying a `data` string. The
//! codec preserves both shapes exactly so existing servers keep working.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error returned by [`decode_inbound`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw text is not valid JSON.
    #[error("failed to parse frame json: {0}")]
    Json(#[from] serde_json::Error),
    /// The frame has no string `type` field.
    #[error("frame has no type tag")]
    MissingTag,
    /// The `type` field names a frame this client does not understand.
    #[error("unknown frame type: {0}")]
    UnknownTag(String),
    /// The tag is known but `data` does not have the expected shape.
    #[error("invalid {tag} payload: {source}")]
    Payload {
        tag: Tag,
        #[source]
        source: serde_json::Error,
    },
}

/// Frame discriminator carried in the `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    /// Full message history, sent by the server once after connecting.
    History,
    /// A single chat message.
    Message,
}

impl Tag {
    /// Wire spelling of the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Message => "message",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "history" => Some(Self::History),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message as stored in the message log.
///
/// On the wire this is `{"data": "<text>"}`; there is no id, sender or
/// timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message body.
    #[serde(rename = "data")]
    pub text: String,
}

impl ChatMessage {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A frame received from the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    /// Replace the whole log with these messages, in order.
    History(Vec<ChatMessage>),
    /// Append one message to the log.
    Message(ChatMessage),
}

/// A frame sent to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Outbound {
    /// User-authored text, sent verbatim as a bare string.
    Message(String),
}

/// Decode one inbound text frame.
///
/// Extra fields on the frame or on history entries are ignored.
///
/// # Errors
///
/// Returns [`CodecError::Json`] for text that is not JSON,
/// [`CodecError::MissingTag`] when `type` is absent or not a string,
/// [`CodecError::UnknownTag`] for unrecognized tags and
/// [`CodecError::Payload`] when `data` has the wrong shape for its tag.
pub fn decode_inbound(raw: &str) -> Result<Inbound, CodecError> {
    let mut value: Value = serde_json::from_str(raw)?;
    let raw_tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(CodecError::MissingTag)?;
    let tag = Tag::parse(raw_tag).ok_or_else(|| CodecError::UnknownTag(raw_tag.to_owned()))?;
    let data = value
        .get_mut("data")
        .map(Value::take)
        .unwrap_or(Value::Null);

    match tag {
        Tag::History => serde_json::from_value::<Vec<ChatMessage>>(data)
            .map(Inbound::History)
            .map_err(|source| CodecError::Payload { tag, source }),
        Tag::Message => serde_json::from_value::<String>(data)
            .map(|text| Inbound::Message(ChatMessage { text }))
            .map_err(|source| CodecError::Payload { tag, source }),
    }
}

/// Encode an outbound frame as JSON text.
#[must_use]
pub fn encode_outbound(frame: &Outbound) -> String {
    // Serializing a string-only enum into a String cannot fail; the empty
    // fallback only exists to keep the signature infallible.
    serde_json::to_string(frame).unwrap_or_default()
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
