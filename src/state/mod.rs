//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `chat` is the protocol-derived session snapshot written only by the
//! controller; `draft` is presentation-owned input text.

pub mod chat;
pub mod draft;
