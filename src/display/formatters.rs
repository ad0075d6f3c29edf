// Display formatting utilities

use crate::grid::{self, Element};
use crate::pattern::Pattern;

/// Format one element line, optionally prefixed by its index
pub fn format_element(index: usize, element: &Element, show_index: bool) -> String {
    if show_index {
        format!("{:>4}: {}", index, element)
    } else {
        element.to_string()
    }
}

/// Header lines describing a pattern
pub fn format_summary(pattern: &Pattern) -> Vec<String> {
    let dims = pattern.dims();
    let (canvas_w, canvas_h) = grid::canvas_size(&dims);
    vec![
        format!(
            "=== GLYPH {}x{} ({}x{} units) ===",
            dims.width(),
            dims.height(),
            canvas_w,
            canvas_h
        ),
        format!(
            "Elements: {} ({} lines, {} dots)",
            pattern.len(),
            grid::line_count(&dims),
            grid::dot_count(&dims)
        ),
        format!("Active: {}", pattern.active_count()),
        format!("Code: {}", pattern),
    ]
}

/// Print the pattern header
pub fn print_pattern_summary(pattern: &Pattern) {
    println!();
    for line in format_summary(pattern) {
        println!("{}", line);
    }
}

/// Print a list of elements
pub fn print_element_list<'a>(items: impl IntoIterator<Item = (usize, &'a Element)>, show_index: bool) {
    for (index, element) in items {
        println!("{}", format_element(index, element, show_index));
    }
}
