//! # wschat
//!
//! Leptos + WASM browser client for a single-socket chat server.
//!
//! The page opens one WebSocket, renders the history the server sends on
//! connect, appends live messages, and sends what the user types. The
//! protocol rules live in [`net::controller`]; everything else is plumbing
//! around it.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: install console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
