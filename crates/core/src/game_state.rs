//! Game state module - the single simulation context
//!
//! `Game` owns the grid, the player, and the pending command queue. A caller
//! (the game loop) pushes commands as input arrives and calls [`Game::tick`]
//! once per frame, then reads a snapshot for drawing:
//!
//! 1. Drain the command queue, newest command first, applying each fully.
//! 2. Run one gravity sweep over the grid.
//!
//! Between ticks the marker cell always sits at the player's position.

use log::{info, trace, warn};

use crate::grid::Grid;
use crate::level::Level;
use crate::player::Player;
use crate::queue::CommandQueue;
use crate::snapshot::{DrawRecord, GameSnapshot};
use crate::tile::Tile;
use crate::types::{Command, DEFAULT_MAX_PENDING};

#[derive(Debug, Clone)]
pub struct Game {
    level: Level,
    grid: Grid,
    player: Player,
    queue: CommandQueue,
    /// Number of completed ticks since load or restart.
    tick: u64,
}

impl Game {
    pub fn new(level: Level) -> Self {
        Self::with_max_pending(level, DEFAULT_MAX_PENDING)
    }

    /// Create a game whose queue holds at most `max_pending` commands per tick.
    pub fn with_max_pending(level: Level, max_pending: usize) -> Self {
        let grid = level.build_grid();
        let (x, y) = level.player_start();
        info!(
            "level {:?} loaded: {}x{}, player at ({x}, {y})",
            level.name(),
            level.width(),
            level.height()
        );
        Self {
            level,
            grid,
            player: Player::new(x, y),
            queue: CommandQueue::with_limit(max_pending),
            tick: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_position(&self) -> (i32, i32) {
        self.player.position()
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn pending(&self) -> &[Command] {
        self.queue.as_slice()
    }

    /// Queue a command for the next tick. Returns `false` if the queue is full
    /// and the command was discarded.
    pub fn push_command(&mut self, command: Command) -> bool {
        let accepted = self.queue.push(command);
        if !accepted {
            warn!(
                "command queue full ({}), dropping {}",
                self.queue.limit(),
                command.as_str()
            );
        }
        accepted
    }

    /// Apply one command immediately, bypassing the queue.
    pub fn apply_command(&mut self, command: Command) -> bool {
        self.player.apply(&mut self.grid, command)
    }

    /// Drain every pending command, newest first. Returns how many were applied.
    pub fn handle_inputs(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.queue.pop() {
            self.player.apply(&mut self.grid, command);
            applied += 1;
        }
        applied
    }

    /// Advance one tick: drain inputs, then run the gravity sweep.
    ///
    /// Returns `true` if any cell changed.
    pub fn tick(&mut self) -> bool {
        let before = self.grid.revision();
        let applied = self.handle_inputs();
        self.grid.update();
        self.tick = self.tick.wrapping_add(1);

        let changed = self.grid.revision() != before;
        trace!(
            "tick {}: {applied} command(s), changed={changed}",
            self.tick
        );
        changed
    }

    /// Reload the level this game was created with.
    pub fn restart(&mut self) {
        self.grid = self.level.build_grid();
        let (x, y) = self.level.player_start();
        self.player = Player::new(x, y);
        self.queue.clear();
        self.tick = 0;
        info!("restarted level {:?}", self.level.name());
    }

    /// True when exactly one marker cell exists and it sits at the player.
    pub fn marker_in_sync(&self) -> bool {
        let (x, y) = self.player.position();
        self.grid.count(|t| *t == Tile::Player) == 1 && self.grid.get(x, y) == Some(Tile::Player)
    }

    /// Draw records for every grid cell, row-major. The player is drawn
    /// separately via [`Game::player_record`].
    pub fn draw_into(&self, out: &mut Vec<DrawRecord>) {
        self.grid.draw_into(out);
    }

    pub fn draw(&self) -> Vec<DrawRecord> {
        self.grid.draw()
    }

    pub fn player_record(&self) -> DrawRecord {
        self.player.draw()
    }

    /// Fill `out` reusing its allocations.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.tiles.clear();
        out.tiles.extend(self.grid.cells().iter().map(|t| t.code()));
        self.grid.draw_into(&mut out.records);
        out.player = self.player.position();
        out.tick = self.tick;
        out.revision = self.grid.revision();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Level::canonical())
    }
}
