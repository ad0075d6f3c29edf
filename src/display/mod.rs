// Display module for pattern formatting and terminal previews
pub mod formatters;
pub mod preview;

// Re-export main functions
pub use formatters::{format_element, format_summary, print_element_list, print_pattern_summary};
pub use preview::{text_preview, PreviewCanvas};
