//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the chat snapshot and the session sender from Leptos
//! context; none of them mutate the message log.

pub mod connection_badge;
pub mod message_input;
pub mod message_list;
