//! Grid module - owns the tile array and every position-indexed mutation
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward,
//! both starting at 0. Storage is a flat row-major vector (y * width + x).
//!
//! All accessors are bounds-checked: reads outside the grid return `None`
//! and any move, push, or drop that would leave the grid is a no-op.

use log::{debug, trace};

use crate::player::Player;
use crate::snapshot::DrawRecord;
use crate::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    cells: Vec<Tile>,
    /// Bumped on every write that changes a cell.
    revision: u64,
}

impl Grid {
    /// Create a grid with every cell set to `tile`.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            cells: vec![tile; width * height],
            revision: 0,
        }
    }

    /// Create from a flat row-major tile vector.
    ///
    /// Returns `None` if `cells.len() != width * height`.
    pub fn from_tiles(width: usize, height: usize, cells: Vec<Tile>) -> Option<Self> {
        if cells.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
            revision: 0,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    /// Get tile at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set tile at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                if self.cells[idx] != tile {
                    self.cells[idx] = tile;
                    self.revision = self.revision.wrapping_add(1);
                }
                true
            }
            None => false,
        }
    }

    /// Gravity sweep: every tile's per-tick update, bottom row first, columns
    /// left to right. Tiles are re-read at visit time, so a block dropped into
    /// an already visited row is not moved again this sweep.
    pub fn update(&mut self) {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                if let Some(tile) = self.get(x, y) {
                    tile.update(self, x, y);
                }
            }
        }
    }

    /// Draw records for every cell, row-major.
    pub fn draw_into(&self, out: &mut Vec<DrawRecord>) {
        out.clear();
        out.reserve(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let tile = self.cells[y * self.width + x];
                out.push(tile.draw(x as i32, y as i32));
            }
        }
    }

    pub fn draw(&self) -> Vec<DrawRecord> {
        let mut out = Vec::new();
        self.draw_into(&mut out);
        out
    }

    /// Move `tile` from (x, y) to (x, y + 1), leaving air behind.
    ///
    /// Unconditional apart from the bounds check; callers decide whether the
    /// tile should fall. Returns false if either cell is outside the grid.
    pub fn drop_tile(&mut self, tile: Tile, x: i32, y: i32) -> bool {
        if !self.contains(x, y) || !self.contains(x, y + 1) {
            return false;
        }
        self.set(x, y + 1, tile);
        self.set(x, y, Tile::Air);
        trace!("drop {:?} ({x}, {y}) -> ({x}, {})", tile.code(), y + 1);
        true
    }

    /// Dispatch a horizontal player move to the destination tile.
    pub fn move_horizontal(&mut self, player: &mut Player, dx: i32) -> bool {
        let (x, y) = player.position();
        match self.get(x + dx, y) {
            Some(tile) => tile.move_horizontal(player, self, dx),
            None => false,
        }
    }

    /// Dispatch a vertical player move to the destination tile.
    pub fn move_vertical(&mut self, player: &mut Player, dy: i32) -> bool {
        let (x, y) = player.position();
        match self.get(x, y + dy) {
            Some(tile) => tile.move_vertical(player, self, dy),
            None => false,
        }
    }

    /// Push the block `tile` next to the player one cell further in `dx`.
    ///
    /// Succeeds only if the landing cell is air and the cell under it is not,
    /// so a pushed block never lands over a gap. On success the player takes
    /// the block's old cell.
    pub fn push_horizontal(&mut self, player: &mut Player, tile: Tile, dx: i32) -> bool {
        let (x, y) = player.position();
        let target_x = x + dx + dx;

        let target_free = self.get(target_x, y).is_some_and(|t| t.is_air());
        let target_supported = self.get(target_x, y + 1).is_some_and(|t| !t.is_air());
        if !target_free || !target_supported {
            return false;
        }

        self.set(target_x, y, tile);
        let moved = player.move_by(self, dx, 0);
        debug!("pushed {:?} to ({target_x}, {y})", tile.code());
        moved
    }

    /// Replace every tile matching `should_remove` with air.
    /// Returns the number of replaced tiles.
    pub fn remove_matching(&mut self, should_remove: impl Fn(&Tile) -> bool) -> usize {
        let mut removed = 0;
        for idx in 0..self.cells.len() {
            if should_remove(&self.cells[idx]) {
                self.cells[idx] = Tile::Air;
                removed += 1;
            }
        }
        if removed > 0 {
            self.revision = self.revision.wrapping_add(1);
        }
        removed
    }

    /// Swap the player marker from `from` to `to`: air at the old cell,
    /// marker at the new one. Both cells must be inside the grid.
    pub fn move_player_marker(&mut self, from: (i32, i32), to: (i32, i32)) -> bool {
        if !self.contains(from.0, from.1) || !self.contains(to.0, to.1) {
            return false;
        }
        self.set(from.0, from.1, Tile::Air);
        self.set(to.0, to.1, Tile::Player);
        true
    }

    /// Count tiles matching `pred`.
    pub fn count(&self, pred: impl Fn(&Tile) -> bool) -> usize {
        self.cells.iter().filter(|t| pred(t)).count()
    }

    /// Position of the first player marker, scanning row-major.
    pub fn find_player(&self) -> Option<(i32, i32)> {
        self.cells
            .iter()
            .position(|t| *t == Tile::Player)
            .map(|idx| ((idx % self.width) as i32, (idx / self.width) as i32))
    }

    /// True if every edge cell is unbreakable.
    pub fn is_walled(&self) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        let w = self.width as i32;
        let h = self.height as i32;
        let wall = |x: i32, y: i32| self.get(x, y) == Some(Tile::Unbreakable);
        (0..w).all(|x| wall(x, 0) && wall(x, h - 1)) && (0..h).all(|y| wall(0, y) && wall(w - 1, y))
    }

    /// Build from text rows for tests: one char per cell.
    ///
    /// `#` unbreakable, `.` air, `:` flux, `P` player, `o`/`O` stone
    /// resting/falling, `b`/`B` box resting/falling, `k`/`l` yellow key/lock,
    /// `K`/`L` blue key/lock.
    #[cfg(test)]
    pub fn from_ascii(rows: &[&str]) -> Self {
        use crate::types::TileCode;

        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "ragged test grid");
            for ch in row.chars() {
                let code = match ch {
                    '#' => TileCode::Unbreakable,
                    '.' => TileCode::Air,
                    ':' => TileCode::Flux,
                    'P' => TileCode::Player,
                    'o' => TileCode::Stone,
                    'O' => TileCode::FallingStone,
                    'b' => TileCode::Box,
                    'B' => TileCode::FallingBox,
                    'k' => TileCode::Key1,
                    'l' => TileCode::Lock1,
                    'K' => TileCode::Key2,
                    'L' => TileCode::Lock2,
                    other => panic!("unknown test tile {other:?}"),
                };
                cells.push(Tile::from_code(code));
            }
        }
        Self::from_tiles(width, height, cells).unwrap()
    }
}
