//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileCode, PLAYER_COLOR};

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the puzzle grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Top-left terminal cell of the grid area for `snap` in `viewport`.
    pub fn origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x + 1, start_y + 1)
    }

    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.height as u16).saturating_mul(self.cell_h).saturating_add(2);
        (w, h)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let (ox, oy) = self.origin(snap, viewport);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, ox - 1, oy - 1, frame_w, frame_h, border);

        // Every cell gets a record; records without a color are background.
        for (i, rec) in snap.records.iter().enumerate() {
            if rec.x < 0 || rec.y < 0 {
                continue;
            }
            let code = snap.tiles.get(i).copied().unwrap_or(TileCode::Air);
            match rec.color {
                Some(color) => {
                    let style = CellStyle {
                        fg: color,
                        bg: BOARD_BG,
                        bold: false,
                        dim: false,
                    };
                    self.fill_cell(fb, ox, oy, rec.x as u16, rec.y as u16, glyph(code), style);
                }
                None => {
                    let style = CellStyle {
                        fg: Rgb::new(70, 70, 80),
                        bg: BOARD_BG,
                        bold: false,
                        dim: true,
                    };
                    self.fill_cell(fb, ox, oy, rec.x as u16, rec.y as u16, ' ', style);
                }
            }
        }

        // Player overlays its (colorless) marker cell.
        let player = snap.player_record();
        if player.x >= 0 && player.y >= 0 {
            let style = CellStyle {
                fg: player.color.unwrap_or(PLAYER_COLOR),
                bg: BOARD_BG,
                bold: true,
                dim: false,
            };
            self.fill_cell(fb, ox, oy, player.x as u16, player.y as u16, '█', style);
        }

        self.draw_side_panel(fb, snap, viewport, ox - 1 + frame_w, oy - 1);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        ox: u16,
        oy: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = ox.saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = oy.saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::fg(Rgb::new(200, 200, 200));
        let dim = CellStyle { dim: true, ..value };

        let mut y = top;
        fb.put_str(panel_x, y, "POS", label);
        y += 1;
        let cx = fb.put_i32(panel_x, y, snap.player.0, value);
        let cx = fb.put_str(cx, y, ",", value);
        fb.put_i32(cx, y, snap.player.1, value);
        y += 2;

        fb.put_str(panel_x, y, "TICK", label);
        y += 1;
        fb.put_u64(panel_x, y, snap.tick, value);
        y += 2;

        fb.put_str(panel_x, y, "KEYS", label);
        y += 1;
        for (text, row) in [
            ("arrows/wasd", 0),
            ("r restart", 1),
            ("q quit", 2),
        ] {
            if y + row >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y + row, text, dim);
        }
    }
}

/// Glyph for a colored tile; keys and locks get their own shapes so the two
/// families stay readable without color.
fn glyph(code: TileCode) -> char {
    match code {
        TileCode::Key1 | TileCode::Key2 => '◆',
        TileCode::Lock1 | TileCode::Lock2 => '▒',
        TileCode::Flux => '░',
        TileCode::Stone | TileCode::FallingStone => '●',
        _ => '█',
    }
}
