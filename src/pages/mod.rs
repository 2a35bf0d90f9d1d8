//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! A page owns session orchestration and delegates rendering details to
//! `components`.

pub mod chat;
