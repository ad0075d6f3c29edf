// Character-cell preview of a pattern
//
// Lattice point (50i, 50j) lands on character cell (2i, 2j), so every edge,
// diagonal crossing and dot gets its own cell on a (4w+1) x (4h+1) canvas.

use crate::grid::{Element, ElementKind, CELL_UNIT};
use crate::pattern::Pattern;

pub struct PreviewCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl PreviewCanvas {
    pub fn new(pattern: &Pattern) -> Self {
        let dims = pattern.dims();
        let cols = 4 * dims.width() as usize + 1;
        let rows = 4 * dims.height() as usize + 1;
        let mut cells = vec![' '; cols * rows];
        for row in (0..rows).step_by(2) {
            for col in (0..cols).step_by(2) {
                cells[row * cols + col] = '.';
            }
        }
        Self { cols, rows, cells }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Draw one element onto the canvas
    pub fn plot(&mut self, element: &Element) {
        let (left, top, _, _) = element.bounds();
        let to_cell = |v: i32| (2 * v / CELL_UNIT) as usize;

        let (col, row, glyph) = match *element {
            Element::Dot { cx, cy, .. } => (to_cell(cx), to_cell(cy), 'o'),
            Element::Line { kind, .. } => {
                let (col, row) = (to_cell(left), to_cell(top));
                match kind {
                    ElementKind::VerticalEdge => (col, row + 1, '|'),
                    ElementKind::HorizontalEdge => (col + 1, row, '-'),
                    ElementKind::ForwardDiagonal => (col + 1, row + 1, '\\'),
                    ElementKind::BackwardDiagonal => (col + 1, row + 1, '/'),
                    ElementKind::Dot => return,
                }
            }
        };

        if col >= self.cols || row >= self.rows {
            return;
        }
        let cell = &mut self.cells[row * self.cols + col];
        *cell = match (*cell, glyph) {
            ('\\', '/') | ('/', '\\') => 'X',
            _ => glyph,
        };
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

/// Render the active elements of a pattern as text, one string per row
pub fn text_preview(pattern: &Pattern) -> Vec<String> {
    let mut canvas = PreviewCanvas::new(pattern);
    for (_, element) in pattern.active_elements() {
        canvas.plot(&element);
    }
    canvas.lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternDims;

    #[test]
    fn test_blank_preview_shows_lattice() {
        let pattern = Pattern::new(PatternDims::new(1, 1).unwrap());
        let lines = text_preview(&pattern);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], ". . .");
        assert_eq!(lines[1], "");
    }

    #[test]
    fn test_crossing_diagonals_and_dot() {
        let mut pattern = Pattern::new(PatternDims::new(1, 1).unwrap());
        // cell (0,0) diagonals, then the centre dot
        pattern.set(0, true).unwrap();
        pattern.set(1, true).unwrap();
        pattern.set(12, true).unwrap();
        let lines = text_preview(&pattern);
        assert_eq!(lines[1], " X");
        assert_eq!(lines[2], ". o .");
    }

    #[test]
    fn test_edges() {
        let mut pattern = Pattern::new(PatternDims::new(1, 1).unwrap());
        // horizontal edge of cell (0,1) and vertical edge of cell (1,0)
        pattern.set(2, true).unwrap();
        pattern.set(5, true).unwrap();
        let lines = text_preview(&pattern);
        assert_eq!(lines[1], "  |");
        assert_eq!(lines[2], ".-. .");
    }
}
