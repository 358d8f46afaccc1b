//! TUI Boulder (workspace facade crate).
//!
//! This package exposes `tui_boulder::{core,input,term,types}` as one public
//! API while the implementation lives in dedicated crates under `crates/`,
//! plus the env-driven [`config`] used by the terminal binary.

pub mod config;

pub use tui_boulder_core as core;
pub use tui_boulder_input as input;
pub use tui_boulder_term as term;
pub use tui_boulder_types as types;
