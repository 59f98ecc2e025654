//! A [`Surface`] that rasterises field-space rectangles onto a grid of
//! terminal cells.
//!
//! A cell takes a rectangle's colour when the cell centre, mapped back into
//! field coordinates, lies inside the rectangle. Strokes colour the outermost
//! ring of covered cells; line width only decides whether a stroke is drawn.

use flappy::core::geometry::{Field, Rect};
use flappy::host::surface::{Rgb, Surface};

pub struct CellCanvas {
    cols: u16,
    rows: u16,
    /// Cells per field pixel.
    scale_x: f64,
    scale_y: f64,
    cells: Vec<Option<Rgb>>,
    fill: Rgb,
    stroke: Rgb,
    line_width: f64,
}

impl CellCanvas {
    /// Canvas of `cols` x `rows` cells that stretches `field` to fill it.
    pub fn new(cols: u16, rows: u16, field: Field) -> Self {
        let scale = |cells: u16, extent: u32| {
            if extent > 0 {
                cells as f64 / extent as f64
            } else {
                1.0
            }
        };
        Self {
            cols,
            rows,
            scale_x: scale(cols, field.width),
            scale_y: scale(rows, field.height),
            cells: vec![None; cols as usize * rows as usize],
            fill: Rgb(0, 0, 0),
            stroke: Rgb(0, 0, 0),
            line_width: 1.0,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[cfg(test)]
    pub fn cell(&self, col: u16, row: u16) -> Option<Rgb> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    pub fn row(&self, row: u16) -> &[Option<Rgb>] {
        let start = row as usize * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Cell index range whose centres fall in `[start, end)`.
    fn span(start: f64, end: f64, scale: f64, len: u16) -> (usize, usize) {
        let len = len as usize;
        let to_cell = |v: f64| ((v * scale - 0.5).ceil().max(0.0) as usize).min(len);
        (to_cell(start), to_cell(end))
    }

    fn covered(&self, rect: Rect) -> ((usize, usize), (usize, usize)) {
        (
            Self::span(rect.x, rect.right(), self.scale_x, self.cols),
            Self::span(rect.y, rect.bottom(), self.scale_y, self.rows),
        )
    }

    fn paint(&mut self, rect: Rect, color: Option<Rgb>) {
        let ((c0, c1), (r0, r1)) = self.covered(rect);
        let cols = self.cols as usize;
        for row in r0..r1 {
            for col in c0..c1 {
                self.cells[row * cols + col] = color;
            }
        }
    }
}

impl Surface for CellCanvas {
    fn clear_rect(&mut self, rect: Rect) {
        self.paint(rect, None);
    }

    fn set_fill_style(&mut self, color: Rgb) {
        self.fill = color;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.paint(rect, Some(self.fill));
    }

    fn set_stroke_style(&mut self, color: Rgb) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_rect(&mut self, rect: Rect) {
        if self.line_width <= 0.0 {
            return;
        }
        let ((c0, c1), (r0, r1)) = self.covered(rect);
        if c0 >= c1 || r0 >= r1 {
            return;
        }
        let cols = self.cols as usize;
        for row in r0..r1 {
            for col in c0..c1 {
                if row == r0 || row == r1 - 1 || col == c0 || col == c1 - 1 {
                    self.cells[row * cols + col] = Some(self.stroke);
                }
            }
        }
    }
}
