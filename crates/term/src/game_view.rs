//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Grid rows grow upward, so row `y` is drawn `BOARD_HEIGHT - 1 - y` rows
//! below the top of the field.

use crate::core::{get_cells, get_color, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{SessionPhase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
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

/// A lightweight terminal renderer for the flying field.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered field plus the status bar row.
    pub fn frame_size(&self) -> (u16, u16) {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        (w, h + 1)
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// `status` is the latest status text pushed by the session; it is shown
    /// in the bar under the field. Callers can reuse one framebuffer across
    /// frames; it is only reallocated when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, status: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, total_h) = self.frame_size();
        let frame_h = total_h - 1;
        let field_w = frame_w - 2;
        let field_h = frame_h - 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', CellStyle::plain(FIELD_BG, FIELD_BG));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Grid cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &kind) in row.iter().enumerate() {
                if kind.is_empty() {
                    continue;
                }
                self.draw_board_cell(fb, start_x, start_y, x as i8, y as i8, kind);
            }
        }

        // Plane overlay.
        if !snap.plane.shape.is_empty() && snap.phase != SessionPhase::NotStarted {
            for &(dx, dy) in get_cells(snap.plane.shape) {
                self.draw_board_cell(
                    fb,
                    start_x,
                    start_y,
                    snap.plane.x + dx,
                    snap.plane.y + dy,
                    snap.plane.shape,
                );
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_status_bar(fb, status, start_x, start_y + frame_h, frame_w);

        match snap.phase {
            SessionPhase::Paused => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED"),
            SessionPhase::GameOver => self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
            SessionPhase::NotStarted => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER")
            }
            SessionPhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, status: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, status, viewport, &mut fb);
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

    fn draw_board_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8, kind: ShapeKind) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }

        let base = Rgb::from_hex(get_color(kind));
        // Good pieces glow, bad pieces are drawn as solid blocks.
        let (fg, ch) = if kind.is_good() {
            (base.scaled(6, 5), '▓')
        } else {
            (base, '█')
        };
        let style = CellStyle {
            fg,
            bg: FIELD_BG,
            bold: kind == ShapeKind::Plane,
            dim: false,
        };

        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (BOARD_HEIGHT as u16 - 1 - y as u16) * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STEP", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.step_counter, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ROUND", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.round_id, value);
        y = y.saturating_add(2);

        for line in ["arrows  fly", "space   pause", "enter   start", "q       quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_status_bar(&self, fb: &mut FrameBuffer, status: &str, x: u16, y: u16, w: u16) {
        let style = CellStyle::plain(Rgb::new(230, 230, 230), Rgb::new(50, 50, 60));
        fb.fill_rect(x, y, w, 1, ' ', style);
        let text_w = status.chars().count().min(w.saturating_sub(2) as usize);
        let clipped: String = status.chars().take(text_w).collect();
        fb.put_str(x + 1, y, &clipped, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16, text: &str) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG)
        };
        fb.put_str(x, mid_y, text, style);
    }
}
