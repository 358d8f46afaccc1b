//! Level data: validated rectangular arrays of tile codes.
//!
//! Levels come from three places: the built-in canonical level, in-memory
//! rows of numeric codes, or JSON files of the form
//!
//! ```json
//! { "name": "optional", "tiles": [[2, 2, 2], [2, 3, 2], [2, 2, 2]] }
//! ```
//!
//! Validation rejects empty or ragged data, unknown codes, a missing or
//! duplicated player, and (unless disabled) any edge cell that is not
//! unbreakable.

use std::fmt;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::grid::Grid;
use crate::tile::Tile;
use crate::types::TileCode;

/// The reference level: 6 rows by 8 columns, player at (1, 1).
pub const CANONICAL_LEVEL: [[u8; 8]; 6] = [
    [2, 2, 2, 2, 2, 2, 2, 2],
    [2, 3, 0, 1, 1, 2, 0, 2],
    [2, 4, 2, 6, 1, 2, 0, 2],
    [2, 8, 4, 1, 1, 2, 0, 2],
    [2, 4, 1, 1, 1, 9, 0, 2],
    [2, 2, 2, 2, 2, 2, 2, 2],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRules {
    /// Reject levels whose edge cells are not all unbreakable.
    pub require_border: bool,
}

impl Default for LevelRules {
    fn default() -> Self {
        Self {
            require_border: true,
        }
    }
}

#[derive(Debug)]
pub enum LevelError {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    UnknownTile {
        code: u8,
        x: usize,
        y: usize,
    },
    MissingPlayer,
    DuplicatePlayer {
        first: (usize, usize),
        second: (usize, usize),
    },
    OpenBorder {
        x: usize,
        y: usize,
    },
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level has no tiles"),
            LevelError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} tiles, expected {expected} (levels must be rectangular)"
            ),
            LevelError::UnknownTile { code, x, y } => {
                write!(f, "unknown tile code {code} at ({x}, {y})")
            }
            LevelError::MissingPlayer => write!(f, "level has no player tile"),
            LevelError::DuplicatePlayer { first, second } => write!(
                f,
                "level has more than one player tile: ({}, {}) and ({}, {})",
                first.0, first.1, second.0, second.1
            ),
            LevelError::OpenBorder { x, y } => {
                write!(f, "edge tile at ({x}, {y}) is not unbreakable")
            }
            LevelError::Json(e) => write!(f, "invalid level json: {e}"),
            LevelError::Io(e) => write!(f, "failed to read level: {e}"),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Json(e) => Some(e),
            LevelError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Json(e)
    }
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

#[derive(Debug, Deserialize)]
struct LevelFile {
    #[serde(default)]
    name: Option<String>,
    tiles: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: Option<String>,
    width: usize,
    height: usize,
    tiles: Vec<TileCode>,
    player: (usize, usize),
}

impl Level {
    /// The built-in reference level.
    pub fn canonical() -> Self {
        let tiles = CANONICAL_LEVEL
            .iter()
            .flatten()
            .map(|&code| TileCode::ALL[code as usize])
            .collect();
        Self {
            name: Some("canonical".to_string()),
            width: CANONICAL_LEVEL[0].len(),
            height: CANONICAL_LEVEL.len(),
            tiles,
            player: (1, 1),
        }
    }

    /// Validate rows of numeric tile codes.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], rules: LevelRules) -> Result<Self, LevelError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(LevelError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut player: Option<(usize, usize)> = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LevelError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &code) in row.iter().enumerate() {
                let tile = TileCode::from_u8(code).ok_or(LevelError::UnknownTile { code, x, y })?;
                if tile == TileCode::Player {
                    if let Some(first) = player {
                        return Err(LevelError::DuplicatePlayer {
                            first,
                            second: (x, y),
                        });
                    }
                    player = Some((x, y));
                }
                tiles.push(tile);
            }
        }

        let player = player.ok_or(LevelError::MissingPlayer)?;

        if rules.require_border {
            for y in 0..height {
                for x in 0..width {
                    let edge = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                    if edge && tiles[y * width + x] != TileCode::Unbreakable {
                        return Err(LevelError::OpenBorder { x, y });
                    }
                }
            }
        }

        Ok(Self {
            name: None,
            width,
            height,
            tiles,
            player,
        })
    }

    pub fn from_json_str(s: &str, rules: LevelRules) -> Result<Self, LevelError> {
        let file: LevelFile = serde_json::from_str(s)?;
        let mut level = Self::from_rows(file.tiles.as_slice(), rules)?;
        level.name = file.name;
        Ok(level)
    }

    pub fn from_path(path: impl AsRef<Path>, rules: LevelRules) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut level = Self::from_json_str(&text, rules)?;
        if level.name.is_none() {
            level.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        info!(
            "loaded level {:?} ({}x{}) from {}",
            level.name(),
            level.width,
            level.height,
            path.display()
        );
        Ok(level)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileCode] {
        &self.tiles
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<TileCode> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.tiles[y * self.width + x])
    }

    /// Coordinates of the player tile.
    pub fn player_start(&self) -> (i32, i32) {
        (self.player.0 as i32, self.player.1 as i32)
    }

    /// Fresh grid in the level's initial state.
    pub fn build_grid(&self) -> Grid {
        let cells = self.tiles.iter().map(|&code| Tile::from_code(code)).collect();
        Grid::from_tiles(self.width, self.height, cells)
            .unwrap_or_else(|| Grid::filled(self.width, self.height, Tile::Air))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_level_passes_validation() {
        let parsed = Level::from_rows(&CANONICAL_LEVEL, LevelRules::default()).unwrap();
        let canonical = Level::canonical();
        assert_eq!(parsed.tiles(), canonical.tiles());
        assert_eq!(parsed.player_start(), (1, 1));
        assert_eq!(canonical.width(), 8);
        assert_eq!(canonical.height(), 6);
    }

    #[test]
    fn rejects_empty() {
        let rows: [[u8; 0]; 0] = [];
        assert!(matches!(
            Level::from_rows(&rows, LevelRules::default()),
            Err(LevelError::Empty)
        ));
        assert!(matches!(
            Level::from_rows(&[Vec::<u8>::new()], LevelRules::default()),
            Err(LevelError::Empty)
        ));
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows: Vec<Vec<u8>> = vec![vec![2, 2, 2], vec![2, 3], vec![2, 2, 2]];
        assert!(matches!(
            Level::from_rows(rows.as_slice(), LevelRules::default()),
            Err(LevelError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn rejects_unknown_code() {
        let rows: [[u8; 3]; 3] = [[2, 2, 2], [2, 12, 3], [2, 2, 2]];
        assert!(matches!(
            Level::from_rows(&rows, LevelRules::default()),
            Err(LevelError::UnknownTile { code: 12, x: 1, y: 1 })
        ));
    }

    #[test]
    fn rejects_missing_and_duplicate_player() {
        let none: [[u8; 3]; 3] = [[2, 2, 2], [2, 0, 2], [2, 2, 2]];
        assert!(matches!(
            Level::from_rows(&none, LevelRules::default()),
            Err(LevelError::MissingPlayer)
        ));

        let two: [[u8; 4]; 3] = [[2, 2, 2, 2], [2, 3, 3, 2], [2, 2, 2, 2]];
        assert!(matches!(
            Level::from_rows(&two, LevelRules::default()),
            Err(LevelError::DuplicatePlayer {
                first: (1, 1),
                second: (2, 1)
            })
        ));
    }

    #[test]
    fn border_rule_is_optional() {
        let open: [[u8; 3]; 3] = [[2, 2, 2], [2, 3, 0], [2, 2, 2]];
        assert!(matches!(
            Level::from_rows(&open, LevelRules::default()),
            Err(LevelError::OpenBorder { x: 2, y: 1 })
        ));
        let relaxed = LevelRules {
            require_border: false,
        };
        assert!(Level::from_rows(&open, relaxed).is_ok());
    }

    #[test]
    fn json_level_keeps_name() {
        let level = Level::from_json_str(
            r#"{"name":"tiny","tiles":[[2,2,2],[2,3,2],[2,2,2]]}"#,
            LevelRules::default(),
        )
        .unwrap();
        assert_eq!(level.name(), Some("tiny"));
        assert_eq!(level.player_start(), (1, 1));
    }

    #[test]
    fn json_errors_are_chained() {
        let err = Level::from_json_str("{\"tiles\": 3}", LevelRules::default()).unwrap_err();
        assert!(matches!(err, LevelError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn build_grid_maps_modes() {
        let rows: [[u8; 6]; 5] = [
            [2, 2, 2, 2, 2, 2],
            [2, 3, 4, 5, 6, 2],
            [2, 7, 8, 9, 10, 2],
            [2, 11, 1, 0, 1, 2],
            [2, 2, 2, 2, 2, 2],
        ];
        let level = Level::from_rows(&rows, LevelRules::default()).unwrap();
        let grid = level.build_grid();
        assert_eq!(grid.get(2, 1).map(|t| t.code()), Some(TileCode::Stone));
        assert_eq!(grid.get(3, 1).map(|t| t.code()), Some(TileCode::FallingStone));
        assert_eq!(grid.get(4, 1).map(|t| t.code()), Some(TileCode::Box));
        assert_eq!(grid.get(1, 2).map(|t| t.code()), Some(TileCode::FallingBox));
        assert_eq!(grid.find_player(), Some((1, 1)));
    }
}
