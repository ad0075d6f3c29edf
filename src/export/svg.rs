// SVG export for glyph patterns
// Writes one <line> or <circle> per exported element, in index order,
// on a canvas of 100w x 100h units.

use crate::glyph_config::ExportConfig;
use crate::grid::{self, Element};
use crate::pattern::Pattern;
use std::fmt;

/// Stroke and fill attributes of one SVG primitive
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: u32,
    /// Only used for circles
    pub fill: String,
}

impl SvgStyle {
    /// Style for active elements
    pub fn active(config: &ExportConfig) -> Self {
        Self {
            stroke: config.active_stroke.clone(),
            stroke_width: config.stroke_width,
            fill: config.dot_fill.clone(),
        }
    }

    /// Style for inactive elements
    pub fn inactive(config: &ExportConfig) -> Self {
        Self {
            stroke: config.inactive_stroke.clone(),
            ..Self::active(config)
        }
    }
}

/// An SVG document of glyph elements
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    elements: Vec<(Element, SvgStyle)>,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn add(&mut self, element: Element, style: SvgStyle) {
        self.elements.push((element, style));
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Converts the document to an SVG string.
    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = self.width,
            h = self.height
        )?;

        for (element, style) in &self.elements {
            match *element {
                Element::Line { x1, y1, x2, y2, .. } => writeln!(
                    f,
                    "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    x1, y1, x2, y2, style.stroke, style.stroke_width
                )?,
                Element::Dot { cx, cy, r } => writeln!(
                    f,
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"/>",
                    cx, cy, r, style.stroke, style.stroke_width, style.fill
                )?,
            }
        }

        write!(f, "</svg>")
    }
}

/// Build the SVG document for a pattern
///
/// Inactive elements are skipped unless `config.include_inactive` is set, in
/// which case they are drawn first so active strokes stay on top.
pub fn build_document(pattern: &Pattern, config: &ExportConfig) -> SvgDocument {
    let (width, height) = grid::canvas_size(&pattern.dims());
    let mut doc = SvgDocument::new(width, height);

    if config.include_inactive {
        let inactive = SvgStyle::inactive(config);
        for (_, element, active) in pattern.elements_with_state() {
            if !active {
                doc.add(element, inactive.clone());
            }
        }
    }

    let active = SvgStyle::active(config);
    for (_, element) in pattern.active_elements() {
        doc.add(element, active.clone());
    }

    log::debug!(
        "Built SVG document {}x{} with {} primitives",
        width,
        height,
        doc.len()
    );
    doc
}

/// Export a pattern as an SVG string
pub fn export_svg(pattern: &Pattern, config: &ExportConfig) -> String {
    build_document(pattern, config).to_svg_string()
}
