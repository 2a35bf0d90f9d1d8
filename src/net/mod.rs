//! Networking modules for the chat socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the seam to a socket, `controller` turns frames into log
//! mutations, and `client` runs the browser session task around them.

pub mod client;
pub mod controller;
pub mod transport;
