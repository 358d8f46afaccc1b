//! Tile module - the closed set of cell kinds and their behavior
//!
//! Every grid cell holds one `Tile`. Cells are replaced wholesale by grid
//! operations; a tile never mutates in place. Behavior is dispatched with an
//! exhaustive `match` per operation:
//!
//! | Tile | Player walks in | Per-tick update |
//! |------|-----------------|-----------------|
//! | Air, Flux | yes | - |
//! | Unbreakable, Player, Lock | blocked | - |
//! | Stone/Box (resting) | horizontal push | gravity |
//! | Stone/Box (falling) | blocked | gravity |
//! | Key | clears its locks, then yes | - |

use log::debug;

use crate::grid::Grid;
use crate::keys::{KeyConfig, BLUE_KEY, YELLOW_KEY};
use crate::player::Player;
use crate::snapshot::DrawRecord;
use crate::types::{Rgb, TileCode, BOX_COLOR, FLUX_COLOR, STONE_COLOR, UNBREAKABLE_COLOR};

/// Whether a stone/box is airborne or settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FallingState {
    Falling,
    #[default]
    Resting,
}

impl FallingState {
    pub fn is_falling(self) -> bool {
        self == FallingState::Falling
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Air,
    Flux,
    Unbreakable,
    /// Occupancy marker; the player's state lives in [`Player`].
    Player,
    Stone(FallingState),
    Box(FallingState),
    Key(&'static KeyConfig),
    Lock(&'static KeyConfig),
}

impl Tile {
    pub fn from_code(code: TileCode) -> Self {
        match code {
            TileCode::Air => Tile::Air,
            TileCode::Flux => Tile::Flux,
            TileCode::Unbreakable => Tile::Unbreakable,
            TileCode::Player => Tile::Player,
            TileCode::Stone => Tile::Stone(FallingState::Resting),
            TileCode::FallingStone => Tile::Stone(FallingState::Falling),
            TileCode::Box => Tile::Box(FallingState::Resting),
            TileCode::FallingBox => Tile::Box(FallingState::Falling),
            TileCode::Key1 => Tile::Key(&YELLOW_KEY),
            TileCode::Lock1 => Tile::Lock(&YELLOW_KEY),
            TileCode::Key2 => Tile::Key(&BLUE_KEY),
            TileCode::Lock2 => Tile::Lock(&BLUE_KEY),
        }
    }

    pub fn code(&self) -> TileCode {
        match self {
            Tile::Air => TileCode::Air,
            Tile::Flux => TileCode::Flux,
            Tile::Unbreakable => TileCode::Unbreakable,
            Tile::Player => TileCode::Player,
            Tile::Stone(FallingState::Resting) => TileCode::Stone,
            Tile::Stone(FallingState::Falling) => TileCode::FallingStone,
            Tile::Box(FallingState::Resting) => TileCode::Box,
            Tile::Box(FallingState::Falling) => TileCode::FallingBox,
            Tile::Key(conf) if conf.is_first() => TileCode::Key1,
            Tile::Key(_) => TileCode::Key2,
            Tile::Lock(conf) if conf.is_first() => TileCode::Lock1,
            Tile::Lock(_) => TileCode::Lock2,
        }
    }

    #[inline]
    pub fn is_air(&self) -> bool {
        matches!(self, Tile::Air)
    }

    #[inline]
    pub fn is_lock1(&self) -> bool {
        matches!(self, Tile::Lock(conf) if conf.is_first())
    }

    #[inline]
    pub fn is_lock2(&self) -> bool {
        matches!(self, Tile::Lock(conf) if !conf.is_first())
    }

    /// Mode of a stone/box; `None` for every other tile.
    pub fn falling_state(&self) -> Option<FallingState> {
        match self {
            Tile::Stone(state) | Tile::Box(state) => Some(*state),
            _ => None,
        }
    }

    /// Same tile with its mode replaced. Non-falling tiles are returned unchanged.
    pub fn with_falling_state(self, state: FallingState) -> Self {
        match self {
            Tile::Stone(_) => Tile::Stone(state),
            Tile::Box(_) => Tile::Box(state),
            other => other,
        }
    }

    /// Fill color; air and the player marker draw nothing.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Tile::Air | Tile::Player => None,
            Tile::Flux => Some(FLUX_COLOR),
            Tile::Unbreakable => Some(UNBREAKABLE_COLOR),
            Tile::Stone(_) => Some(STONE_COLOR),
            Tile::Box(_) => Some(BOX_COLOR),
            Tile::Key(conf) | Tile::Lock(conf) => Some(conf.color()),
        }
    }

    pub fn draw(&self, x: i32, y: i32) -> DrawRecord {
        DrawRecord {
            color: self.color(),
            x,
            y,
        }
    }

    /// State a block sitting on top of this tile should take.
    pub fn fall_on_top_state(&self) -> FallingState {
        match self {
            Tile::Air => FallingState::Falling,
            _ => FallingState::Resting,
        }
    }

    /// React to the player trying to enter this tile horizontally.
    ///
    /// Returns `true` if the player moved.
    pub fn move_horizontal(self, player: &mut Player, grid: &mut Grid, dx: i32) -> bool {
        match self {
            Tile::Air | Tile::Flux => player.move_by(grid, dx, 0),
            Tile::Stone(FallingState::Resting) | Tile::Box(FallingState::Resting) => {
                grid.push_horizontal(player, self, dx)
            }
            Tile::Key(conf) => {
                let removed = conf.remove_locks(grid);
                debug!("key picked up: removed {removed} lock(s)");
                player.move_by(grid, dx, 0)
            }
            Tile::Unbreakable
            | Tile::Player
            | Tile::Stone(FallingState::Falling)
            | Tile::Box(FallingState::Falling)
            | Tile::Lock(_) => false,
        }
    }

    /// React to the player trying to enter this tile vertically.
    ///
    /// Blocks cannot be pushed vertically.
    pub fn move_vertical(self, player: &mut Player, grid: &mut Grid, dy: i32) -> bool {
        match self {
            Tile::Air | Tile::Flux => player.move_by(grid, 0, dy),
            Tile::Key(conf) => {
                let removed = conf.remove_locks(grid);
                debug!("key picked up: removed {removed} lock(s)");
                player.move_by(grid, 0, dy)
            }
            Tile::Unbreakable
            | Tile::Player
            | Tile::Stone(_)
            | Tile::Box(_)
            | Tile::Lock(_) => false,
        }
    }

    /// Per-tick gravity reaction of the tile at `(x, y)`.
    ///
    /// Stones and boxes recompute their mode from the tile below and drop one
    /// row when it is air. A block on the bottom edge of the grid rests.
    pub fn update(self, grid: &mut Grid, x: i32, y: i32) {
        if self.falling_state().is_none() {
            return;
        }

        let state = grid
            .get(x, y + 1)
            .map(|below| below.fall_on_top_state())
            .unwrap_or(FallingState::Resting);
        let next = self.with_falling_state(state);

        match state {
            FallingState::Falling => {
                grid.drop_tile(next, x, y);
            }
            FallingState::Resting => {
                grid.set(x, y, next);
            }
        }
    }
}
