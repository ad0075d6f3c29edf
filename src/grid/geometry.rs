// Grid geometry - enumerates lines and dots in a fixed order
//
// The glyph surface is 2w x 2h unit cells of CELL_UNIT canvas units. Every cell
// contributes its left edge (except column 0), its top edge (except row 0) and
// both diagonals; interior lattice points contribute one dot each. The order
// below defines the bit positions of the hex format and must not change.

use crate::config::PatternDims;
use crate::grid::element::{Element, ElementKind};
use log::debug;

/// Side length of one unit cell in canvas units
pub const CELL_UNIT: i32 = 50;
/// Radius of a dot in canvas units
pub const DOT_RADIUS: i32 = 10;

/// Total number of elements for the given dimensions
pub fn element_count(dims: &PatternDims) -> usize {
    dims.element_count()
}

/// Number of line elements: `16wh - 2w - 2h`
pub fn line_count(dims: &PatternDims) -> usize {
    let (w, h) = (dims.width() as usize, dims.height() as usize);
    16 * w * h - 2 * w - 2 * h
}

/// Number of dot elements: `(2w - 1)(2h - 1)`
pub fn dot_count(dims: &PatternDims) -> usize {
    let (w, h) = (dims.width() as usize, dims.height() as usize);
    (2 * w - 1) * (2 * h - 1)
}

/// Canvas size (width, height) in canvas units
pub fn canvas_size(dims: &PatternDims) -> (u32, u32) {
    let side = 2 * CELL_UNIT as u32;
    (side * dims.width(), side * dims.height())
}

/// Lazily enumerate every element in index order
pub fn elements(dims: &PatternDims) -> Elements {
    Elements {
        // PatternDims caps both sides at MAX_DIMENSION, so these fit in i32
        cols: 2 * dims.width() as i32,
        rows: 2 * dims.height() as i32,
        x: 0,
        y: 0,
        step: 0,
        in_dots: false,
        remaining: dims.element_count(),
    }
}

/// Collect every element in index order
pub fn generate(dims: &PatternDims) -> Vec<Element> {
    let all: Vec<Element> = elements(dims).collect();
    debug_assert_eq!(all.len(), dims.element_count());
    debug!(
        "Generated {} elements for {}x{} grid",
        all.len(),
        dims.width(),
        dims.height()
    );
    all
}

/// Look up the element at `index` by replaying the enumeration
///
/// Costs O(index). Callers doing repeated lookups on one grid should index
/// into [`generate`] instead.
pub fn element_at(dims: &PatternDims, index: usize) -> Option<Element> {
    elements(dims).nth(index)
}

/// Iterator over the elements of a grid, see [`elements`]
#[derive(Debug, Clone)]
pub struct Elements {
    cols: i32,
    rows: i32,
    x: i32,
    y: i32,
    // 0..4: vertical, horizontal, forward, backward
    step: u8,
    in_dots: bool,
    remaining: usize,
}

impl Elements {
    fn next_line(&mut self) -> Option<Element> {
        let (x, y, step) = (self.x, self.y, self.step);

        self.step += 1;
        if self.step == 4 {
            self.step = 0;
            self.y += 1;
            if self.y == self.rows {
                self.y = 0;
                self.x += 1;
            }
        }

        let (left, top) = (CELL_UNIT * x, CELL_UNIT * y);
        let (right, bottom) = (left + CELL_UNIT, top + CELL_UNIT);
        let line = |kind, x1, y1, x2, y2| Element::Line {
            kind,
            x1,
            y1,
            x2,
            y2,
        };

        match step {
            0 if x != 0 => Some(line(ElementKind::VerticalEdge, left, top, left, bottom)),
            1 if y != 0 => Some(line(ElementKind::HorizontalEdge, left, top, right, top)),
            2 => Some(line(ElementKind::ForwardDiagonal, left, top, right, bottom)),
            3 => Some(line(ElementKind::BackwardDiagonal, right, top, left, bottom)),
            _ => None,
        }
    }

    fn next_dot(&mut self) -> Option<Element> {
        let (cols, rows) = (self.cols - 1, self.rows - 1);
        if self.x >= cols {
            return None;
        }
        let dot = Element::Dot {
            cx: CELL_UNIT + CELL_UNIT * self.x,
            cy: CELL_UNIT + CELL_UNIT * self.y,
            r: DOT_RADIUS,
        };
        self.y += 1;
        if self.y == rows {
            self.y = 0;
            self.x += 1;
        }
        Some(dot)
    }
}

impl Iterator for Elements {
    type Item = Element;

    fn next(&mut self) -> Option<Element> {
        loop {
            if self.in_dots {
                let dot = self.next_dot()?;
                self.remaining -= 1;
                return Some(dot);
            }
            if self.x >= self.cols {
                self.in_dots = true;
                self.x = 0;
                self.y = 0;
                continue;
            }
            if let Some(line) = self.next_line() {
                self.remaining -= 1;
                return Some(line);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Elements {}

impl std::iter::FusedIterator for Elements {}
