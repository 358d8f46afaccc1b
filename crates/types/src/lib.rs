//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, level files).
//!
//! # Tile Codes
//!
//! Levels are stored as rectangular arrays of integer codes:
//!
//! | Code | Tile | Initial mode |
//! |------|------|--------------|
//! | 0 | Air | - |
//! | 1 | Flux | - |
//! | 2 | Unbreakable | - |
//! | 3 | Player | - |
//! | 4 | Stone | Resting |
//! | 5 | Falling stone | Falling |
//! | 6 | Box | Resting |
//! | 7 | Falling box | Falling |
//! | 8 | Key (yellow) | - |
//! | 9 | Lock (yellow) | - |
//! | 10 | Key (blue) | - |
//! | 11 | Lock (blue) | - |
//!
//! # Timing
//!
//! The simulation advances in discrete ticks. The default tick interval is
//! `TICK_MS` (33ms, ~30 FPS); pacing itself belongs to the caller.
//!
//! # Examples
//!
//! ```
//! use tui_boulder_types::{Command, TileCode};
//!
//! let cmd = Command::from_str("left").unwrap();
//! assert_eq!(cmd, Command::Left);
//! assert_eq!(cmd.delta(), (-1, 0));
//!
//! assert_eq!(TileCode::from_u8(4), Some(TileCode::Stone));
//! assert_eq!(TileCode::Stone.as_u8(), 4);
//! assert_eq!(TileCode::from_u8(12), None);
//! ```

/// Frames per second of the reference game loop
pub const FPS: u32 = 30;

/// Fixed timestep interval in milliseconds (33ms ≈ 30 FPS)
pub const TICK_MS: u32 = 1000 / FPS;

/// Edge length of one tile in pixels (for pixel-space draw records)
pub const TILE_SIZE: u32 = 30;

/// Hard upper bound on commands buffered between two ticks.
pub const MAX_PENDING_COMMANDS: usize = 64;

/// Default per-tick command cap.
pub const DEFAULT_MAX_PENDING: usize = 16;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boulder_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#ff0000"), Some(Rgb::new(255, 0, 0)));
    /// assert_eq!(Rgb::from_hex("8b4513"), Some(Rgb::new(0x8b, 0x45, 0x13)));
    /// assert_eq!(Rgb::from_hex("#fff"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

/// Tile colors.
pub const FLUX_COLOR: Rgb = Rgb::new(0xcc, 0xff, 0xcc);
pub const UNBREAKABLE_COLOR: Rgb = Rgb::new(0x99, 0x99, 0x99);
pub const STONE_COLOR: Rgb = Rgb::new(0x00, 0x00, 0xcc);
pub const BOX_COLOR: Rgb = Rgb::new(0x8b, 0x45, 0x13);
pub const YELLOW_KEY_COLOR: Rgb = Rgb::new(0xff, 0xcc, 0x00);
pub const BLUE_KEY_COLOR: Rgb = Rgb::new(0x00, 0xcc, 0xff);
pub const PLAYER_COLOR: Rgb = Rgb::new(0xff, 0x00, 0x00);

/// Directional commands produced by input capture and consumed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one cell left (or push left)
    Left,
    /// Move one cell right (or push right)
    Right,
    /// Move one cell up
    Up,
    /// Move one cell down
    Down,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_boulder_types::Command;
    ///
    /// assert_eq!(Command::from_str("Up"), Some(Command::Up));
    /// assert_eq!(Command::from_str("d"), Some(Command::Down));
    /// assert_eq!(Command::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Command::Left),
            "right" | "r" => Some(Command::Right),
            "up" | "u" => Some(Command::Up),
            "down" | "d" => Some(Command::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Up => "up",
            Command::Down => "down",
        }
    }

    /// Grid offset `(dx, dy)`; y grows downward.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Command::Left => (-1, 0),
            Command::Right => (1, 0),
            Command::Up => (0, -1),
            Command::Down => (0, 1),
        }
    }
}

/// Raw tile codes as found in level data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCode {
    Air,
    Flux,
    Unbreakable,
    Player,
    Stone,
    FallingStone,
    Box,
    FallingBox,
    Key1,
    Lock1,
    Key2,
    Lock2,
}

impl TileCode {
    /// All codes in numeric order.
    pub const ALL: [TileCode; 12] = [
        TileCode::Air,
        TileCode::Flux,
        TileCode::Unbreakable,
        TileCode::Player,
        TileCode::Stone,
        TileCode::FallingStone,
        TileCode::Box,
        TileCode::FallingBox,
        TileCode::Key1,
        TileCode::Lock1,
        TileCode::Key2,
        TileCode::Lock2,
    ];

    /// Decode a numeric tile code. Returns `None` for unknown codes.
    pub fn from_u8(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            TileCode::Air => 0,
            TileCode::Flux => 1,
            TileCode::Unbreakable => 2,
            TileCode::Player => 3,
            TileCode::Stone => 4,
            TileCode::FallingStone => 5,
            TileCode::Box => 6,
            TileCode::FallingBox => 7,
            TileCode::Key1 => 8,
            TileCode::Lock1 => 9,
            TileCode::Key2 => 10,
            TileCode::Lock2 => 11,
        }
    }
}
