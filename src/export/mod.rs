// Export module - projections of a pattern's active elements
pub mod svg;

pub use svg::{export_svg, SvgDocument, SvgStyle};
