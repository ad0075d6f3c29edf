// Grid module - geometry of the line/dot lattice a glyph is drawn on
// Element indices produced here are the bit positions used by the hex codec

pub mod element;
pub mod geometry;

pub use element::{Element, ElementKind};
pub use geometry::{
    canvas_size, dot_count, element_at, element_count, elements, generate, line_count, Elements,
    CELL_UNIT, DOT_RADIUS,
};
