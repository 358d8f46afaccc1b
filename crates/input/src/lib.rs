//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps key presses into [`crate::types::Command`]
//! values for the core's command queue, and recognizes the quit/restart keys
//! the game loop handles itself.

pub mod map;

pub use tui_boulder_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
