// Glyph Grid: symbol editor core for line-and-dot glyphs
// Maps grid geometry to bit indices and serializes patterns as hex or SVG

// Modular structure
pub mod codec;
pub mod config;
pub mod display;
pub mod export;
pub mod grid;
pub mod pattern;
pub mod session;

// Error handling and configuration
pub mod glyph_config;
pub mod glyph_errors;
pub use glyph_config::{DisplayConfig, ExportConfig, GlyphConfig};
pub use glyph_errors::{FormatError, GlyphError, GlyphResult};

// Re-export main types for convenience
pub use codec::{decode_hex, encode_hex};
pub use config::PatternDims;
pub use grid::{Element, ElementKind};
pub use pattern::Pattern;
pub use session::EditSession;
