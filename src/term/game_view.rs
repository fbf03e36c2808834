//! GameView: maps a `core::GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The board's wall sentinels are
//! drawn reverse-video straight from the grid; there is no separately drawn
//! border.

use crate::core::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, ShapeId, BOARD_COLS, BOARD_ROWS};

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

/// Renders the playfield and the score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = BOARD_COLS as u16 * self.cell_w;
        let field_h = BOARD_ROWS as u16 * self.cell_h;
        let start_x = viewport.width.saturating_sub(field_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(field_h) / 2;

        // Locked grid, walls included.
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let cell = state.board().get(row, col).unwrap_or(Cell::Empty);
                let (ch, style) = cell_glyph(cell);
                self.fill_cell(&mut fb, start_x, start_y, row, col, ch, style);
            }
        }

        // Active piece on top.
        let active = state.active();
        let style = CellStyle {
            fg: shape_color(active.shape),
            bg: FIELD_BG,
            bold: true,
            reverse: false,
        };
        for (row, col) in active.cells() {
            self.fill_cell(&mut fb, start_x, start_y, row, col, '█', style);
        }

        self.draw_panel(&mut fb, state, start_x + field_w + 2, start_y);

        if state.over() {
            self.draw_overlay(&mut fb, start_x, start_y, field_w, field_h, "GAME OVER");
        }

        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: i8,
        col: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + col as u16 * self.cell_w;
        let py = start_y + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, y: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let progression = state.progression();
        let rows = [
            ("SCORE", progression.score()),
            ("LINES", progression.lines()),
            ("LEVEL", progression.level()),
        ];
        for (i, (name, val)) in rows.iter().enumerate() {
            let row_y = y + 2 * i as u16;
            fb.put_str(x, row_y, name, label);
            fb.put_str(x, row_y + 1, &format!("{val:>8}"), value);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        field_w: u16,
        field_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x + field_w.saturating_sub(text_w) / 2;
        let y = start_y + field_h / 2;
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(x, y, text, style);
    }
}

const PANEL_W: u16 = 12;
const FIELD_BG: Rgb = Rgb::new(25, 25, 35);

fn cell_glyph(cell: Cell) -> (char, CellStyle) {
    match cell {
        Cell::Empty => (
            ' ',
            CellStyle {
                fg: Rgb::new(70, 70, 85),
                bg: FIELD_BG,
                bold: false,
                reverse: false,
            },
        ),
        Cell::Filled(shape) => (
            '█',
            CellStyle {
                fg: shape_color(shape),
                bg: FIELD_BG,
                bold: false,
                reverse: false,
            },
        ),
        Cell::Wall => (
            ' ',
            CellStyle {
                fg: Rgb::new(180, 180, 180),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                reverse: true,
            },
        ),
    }
}

fn shape_color(shape: ShapeId) -> Rgb {
    match shape {
        ShapeId::I => Rgb::new(80, 220, 220),
        ShapeId::S => Rgb::new(100, 220, 120),
        ShapeId::Z => Rgb::new(220, 80, 80),
        ShapeId::O => Rgb::new(240, 220, 80),
        ShapeId::T => Rgb::new(200, 120, 220),
        ShapeId::J => Rgb::new(80, 120, 220),
        ShapeId::L => Rgb::new(255, 165, 0),
    }
}
