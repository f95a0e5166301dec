//! BoardView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: cursor marker row, bordered grid (row 0 drawn at
//! the bottom), column number row. A side panel sits to the right when the
//! viewport is wide enough.

use crate::core::{GameSnapshot, Outcome};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Piece, Player, BOARD_SIZE, COLS, ROWS};

const BOARD_BG: Rgb = Rgb::new(25, 35, 70);
const X_COLOR: Rgb = Rgb::new(220, 70, 70);
const O_COLOR: Rgb = Rgb::new(240, 210, 70);
const INK: Rgb = Rgb::new(20, 20, 20);

/// Largest board cell width, in terminal columns.
pub const MAX_CELL_W: u16 = 16;
/// Largest board cell height, in terminal rows.
pub const MAX_CELL_H: u16 = 8;

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

/// Terminal renderer for the Piezas board.
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Wider than tall to compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 4, cell_h: 2 }
    }
}

impl BoardView {
    /// Cell sizes are clamped to `1..=MAX_CELL_W` and `1..=MAX_CELL_H`.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
            cell_h: cell_h.clamp(1, MAX_CELL_H),
        }
    }

    /// Size of the bordered grid, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `cursor` is the selected column; `None` hides the marker.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size();
        // Marker row above, label row below.
        let total_h = frame_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let marker_y = viewport.height.saturating_sub(total_h) / 2;
        let frame_y = marker_y + 1;

        let board_bg = Style::fg(Rgb::new(90, 90, 110)).on(BOARD_BG);
        fb.fill_rect(
            start_x + 1,
            frame_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            board_bg,
        );
        draw_border(fb, start_x, frame_y, frame_w, frame_h, Style::default());

        for row in 0..ROWS {
            for col in 0..COLS {
                let highlight = snap.last_landing == Some((row, col));
                self.draw_cell(fb, start_x, frame_y, row, col, snap.cells[row][col], highlight);
            }
        }

        if let Some(col) = cursor.filter(|&c| c < COLS) {
            let x = self.column_center(start_x, col);
            let style = Style::fg(player_color(snap.turn)).bold();
            fb.put_char(x, marker_y, '▼', style);
        }

        let label = Style::default().dim();
        let label_y = frame_y + frame_h;
        for col in 0..COLS {
            let x = self.column_center(start_x, col);
            fb.put_u32(x, label_y, col as u32 + 1, label);
        }

        draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, frame_y);

        if snap.outcome.is_over() {
            let text = outcome_text(snap.outcome);
            let text_w = text.chars().count() as u16;
            let x = start_x + frame_w.saturating_sub(text_w) / 2;
            let y = frame_y + frame_h / 2;
            fb.put_str(x, y, text, Style::fg(Rgb::new(255, 255, 255)).bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn column_center(&self, start_x: u16, col: usize) -> u16 {
        start_x + 1 + col as u16 * self.cell_w + (self.cell_w - 1) / 2
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_y: u16,
        row: usize,
        col: usize,
        piece: Piece,
        highlight: bool,
    ) {
        let px = start_x + 1 + col as u16 * self.cell_w;
        // Row 0 is the bottom of the board.
        let py = frame_y + 1 + (ROWS - 1 - row) as u16 * self.cell_h;
        let cx = px + (self.cell_w - 1) / 2;
        let cy = py + (self.cell_h - 1) / 2;

        match piece.player() {
            Some(player) => {
                let base = Style::fg(INK).on(player_color(player));
                let style = if highlight { base.bold() } else { base };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(cx, cy, player.as_char(), style);
            }
            None => {
                let style = Style::fg(Rgb::new(90, 90, 110)).on(BOARD_BG).dim();
                fb.put_char(cx, cy, '·', style);
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, panel_x: u16, top: u16) {
    if panel_x >= viewport.width || viewport.width - panel_x < 10 {
        return;
    }

    let label = Style::default().bold();
    let value = Style::default();
    let mut y = top;

    fb.put_str(panel_x, y, "TURN", label);
    y += 1;
    fb.put_char(panel_x, y, snap.turn.as_char(), Style::fg(player_color(snap.turn)).bold());
    y += 2;

    fb.put_str(panel_x, y, "MOVES", label);
    y += 1;
    fb.put_u32(panel_x, y, snap.attempts, value);
    y += 2;

    fb.put_str(panel_x, y, "FILLED", label);
    y += 1;
    let filled = format!("{}/{}", snap.filled(), BOARD_SIZE);
    fb.put_str(panel_x, y, &filled, value);
    y += 2;

    fb.put_str(panel_x, y, "STATUS", label);
    y += 1;
    fb.put_str(panel_x, y, outcome_text(snap.outcome), value);

    if let Some(runs) = snap.runs {
        y += 2;
        fb.put_str(panel_x, y, "RUNS", label);
        y += 1;
        fb.put_str(panel_x, y, "X", Style::fg(X_COLOR));
        fb.put_u32(panel_x + 2, y, runs.x as u32, value);
        fb.put_str(panel_x + 5, y, "O", Style::fg(O_COLOR));
        fb.put_u32(panel_x + 7, y, runs.o as u32, value);
    }
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::X => X_COLOR,
        Player::O => O_COLOR,
    }
}

pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::InProgress => "IN PLAY",
        Outcome::Winner(Player::X) => "X WINS",
        Outcome::Winner(Player::O) => "O WINS",
        Outcome::Tie => "TIE",
    }
}
