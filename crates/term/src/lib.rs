//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders a core snapshot into
//! a framebuffer, which is then flushed to the terminal with run-length diffs.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the view pure so it can be unit-tested
//! - Control aspect ratio (2 chars wide per grid cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_boulder_core as core;
pub use tui_boulder_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
