//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O), so layouts can be unit-tested.

use crate::core::{base_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal renderer for the playfield and its side panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner of the board frame (border included).
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
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

    fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        self.draw_border(fb, origin, frame_w, frame_h, border);

        for row in 0..BOARD_HEIGHT as usize {
            for col in 0..BOARD_WIDTH as usize {
                match snap.cell(row, col) {
                    Some(kind) => self.draw_block(fb, origin, row as u16, col as u16, kind),
                    None => {
                        let dot = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
                        self.fill_cell(fb, origin, row as u16, col as u16, '·', dot);
                    }
                }
            }
        }

        // Cells above the board are not drawn.
        if let Some(active) = snap.active {
            for (row, col) in active.cells() {
                if row >= 0 && row < BOARD_HEIGHT as i8 && col >= 0 && col < BOARD_WIDTH as i8 {
                    self.draw_block(fb, origin, row as u16, col as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin, frame_w);

        match snap.phase {
            GamePhase::ReadyToStart => {
                self.draw_overlay_text(fb, origin, frame_w, frame_h, "PRESS ENTER")
            }
            GamePhase::Paused => self.draw_overlay_text(fb, origin, frame_w, frame_h, "PAUSED"),
            GamePhase::GameOver => {
                self.draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER!")
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, o: Origin, w: u16, h: u16, style: CellStyle) {
        fb.put_char(o.x, o.y, '┌', style);
        fb.put_char(o.x + w - 1, o.y, '┐', style);
        fb.put_char(o.x, o.y + h - 1, '└', style);
        fb.put_char(o.x + w - 1, o.y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(o.x + dx, o.y, '─', style);
            fb.put_char(o.x + dx, o.y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(o.x, o.y + dy, '│', style);
            fb.put_char(o.x + w - 1, o.y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, o: Origin, row: u16, col: u16, kind: PieceKind) {
        let style = CellStyle::new(piece_rgb(kind.color()), PLAYFIELD_BG).bold();
        self.fill_cell(fb, o, row, col, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, o: Origin, row: u16, col: u16, ch: char, style: CellStyle) {
        let px = o.x + 1 + col * self.cell_w;
        let py = o.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        o: Origin,
        frame_w: u16,
    ) {
        let panel_x = o.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = o.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x, y + 1, snap.best.max(snap.score), value);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let shape = base_shape(snap.next);
        let style = CellStyle::new(piece_rgb(snap.next.color()), PANEL_BG).bold();
        for (dr, dc) in shape.offsets() {
            let x = panel_x + dc as u16 * self.cell_w;
            fb.fill_rect(x, y + dr as u16, self.cell_w, 1, '█', style);
        }
        y += shape.size() as u16 + 1;

        let hint = value.dim();
        for line in ["←→ move", "↑ rotate", "↓ drop", "p pause", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, o: Origin, frame_w: u16, frame_h: u16, text: &str) {
        let mid_y = o.y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = o.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        // Dark band behind the message, inside the border.
        fb.fill_rect(o.x + 1, mid_y.saturating_sub(1), frame_w - 2, 3, ' ', style);
        fb.put_str(x, mid_y, text, style);
    }
}

/// Terminal color for a piece color.
pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Red => Rgb::new(220, 80, 80),
    }
}
