//! Player position and intent handling.
//!
//! The player never inspects tiles itself: a move asks the grid for the
//! destination tile and lets that tile decide. Tiles that accept the player
//! call back into [`Player::move_by`], which keeps the grid's marker cell in
//! sync with the tracked coordinates.

use log::trace;

use crate::grid::Grid;
use crate::snapshot::DrawRecord;
use crate::types::{Command, PLAYER_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    x: i32,
    y: i32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn move_horizontal(&mut self, grid: &mut Grid, dx: i32) -> bool {
        grid.move_horizontal(self, dx)
    }

    pub fn move_vertical(&mut self, grid: &mut Grid, dy: i32) -> bool {
        grid.move_vertical(self, dy)
    }

    /// Apply a directional command. Returns `true` if the player moved.
    pub fn apply(&mut self, grid: &mut Grid, command: Command) -> bool {
        let moved = match command {
            Command::Left => self.move_horizontal(grid, -1),
            Command::Right => self.move_horizontal(grid, 1),
            Command::Up => self.move_vertical(grid, -1),
            Command::Down => self.move_vertical(grid, 1),
        };
        trace!(
            "command {} -> {} at ({}, {})",
            command.as_str(),
            if moved { "moved" } else { "blocked" },
            self.x,
            self.y
        );
        moved
    }

    /// Relocate by (dx, dy), moving the marker cell with us.
    pub fn move_by(&mut self, grid: &mut Grid, dx: i32, dy: i32) -> bool {
        let to = (self.x + dx, self.y + dy);
        if !grid.move_player_marker(self.position(), to) {
            return false;
        }
        self.x = to.0;
        self.y = to.1;
        true
    }

    /// The player is drawn as a fixed-color square over its marker cell.
    pub fn draw(&self) -> DrawRecord {
        DrawRecord {
            color: Some(PLAYER_COLOR),
            x: self.x,
            y: self.y,
        }
    }
}
