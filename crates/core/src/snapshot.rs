use crate::types::{Rgb, TileCode, TILE_SIZE};

/// One cell's drawing instruction. `color == None` draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawRecord {
    pub color: Option<Rgb>,
    pub x: i32,
    pub y: i32,
}

/// Pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DrawRecord {
    /// Rectangle covered by this cell at `TILE_SIZE` pixels per tile.
    pub fn rect(&self) -> PixelRect {
        let size = TILE_SIZE as i32;
        PixelRect {
            x: self.x * size,
            y: self.y * size,
            width: TILE_SIZE,
            height: TILE_SIZE,
        }
    }
}

/// Read-only view of a game taken between ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major tile codes (y * width + x), including falling modes.
    pub tiles: Vec<TileCode>,
    /// Row-major draw records for every cell.
    pub records: Vec<DrawRecord>,
    pub player: (i32, i32),
    pub tick: u64,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.tiles.clear();
        self.records.clear();
        self.player = (0, 0);
        self.tick = 0;
        self.revision = 0;
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<TileCode> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        self.tiles.get(y as usize * self.width + x as usize).copied()
    }

    /// The player square drawn on top of the grid.
    pub fn player_record(&self) -> DrawRecord {
        DrawRecord {
            color: Some(crate::types::PLAYER_COLOR),
            x: self.player.0,
            y: self.player.1,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tiles: Vec::new(),
            records: Vec::new(),
            player: (0, 0),
            tick: 0,
            revision: 0,
        }
    }
}
