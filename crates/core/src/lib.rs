//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the tile-grid rules of the puzzle: gravity, pushing,
//! keys and locks. It has **zero dependencies** on rendering, timing, or
//! terminal I/O, making it:
//!
//! - **Deterministic**: the same level and command sequence always produce the same grid
//! - **Testable**: every rule is exercised directly on small grids
//! - **Portable**: runs headless, in a terminal, or behind any other front end
//!
//! # Module Structure
//!
//! - [`tile`]: the closed set of tile kinds and their per-kind behavior
//! - [`keys`]: the two key/lock families
//! - [`grid`]: tile storage, gravity sweep, push and lock-removal operations
//! - [`player`]: player position and command handling
//! - [`queue`]: bounded pending-command buffer (drained newest first)
//! - [`level`]: level validation and JSON loading
//! - [`game_state`]: the simulation context tying everything together
//! - [`snapshot`]: read-only views for renderers
//!
//! # Rules
//!
//! - **Gravity**: stones and boxes over air drop one row per tick, swept bottom row first
//! - **Pushing**: a resting block can be pushed sideways onto supported air
//! - **Keys**: walking onto a key clears every lock of its color
//!
//! # Example
//!
//! ```
//! use tui_boulder_core::Game;
//! use tui_boulder_types::Command;
//!
//! let mut game = Game::default();
//! assert_eq!(game.player_position(), (1, 1));
//!
//! game.push_command(Command::Right);
//! game.tick();
//!
//! assert_eq!(game.player_position(), (2, 1));
//! assert!(game.marker_in_sync());
//! ```

pub mod game_state;
pub mod grid;
pub mod keys;
pub mod level;
pub mod player;
pub mod queue;
pub mod snapshot;
pub mod tile;

pub use tui_boulder_types as types;

// Re-export commonly used types for convenience
pub use game_state::Game;
pub use grid::Grid;
pub use keys::{KeyConfig, LockMatcher, BLUE_KEY, YELLOW_KEY};
pub use level::{Level, LevelError, LevelRules, CANONICAL_LEVEL};
pub use player::Player;
pub use queue::CommandQueue;
pub use snapshot::{DrawRecord, GameSnapshot, PixelRect};
pub use tile::{FallingState, Tile};
