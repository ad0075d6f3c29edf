// Pattern dimensions, fixed for the lifetime of a pattern
use crate::glyph_errors::{GlyphError, GlyphResult};

/// Largest accepted width or height, keeps canvas coordinates within `i32`
pub const MAX_DIMENSION: u32 = 256;

/// Width and height of a glyph, in grid cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawDims")]
pub struct PatternDims {
    width: u32,
    height: u32,
}

#[derive(serde::Deserialize)]
struct RawDims {
    width: u32,
    height: u32,
}

impl TryFrom<RawDims> for PatternDims {
    type Error = GlyphError;

    fn try_from(raw: RawDims) -> Result<Self, Self::Error> {
        PatternDims::new(raw.width, raw.height)
    }
}

impl Default for PatternDims {
    fn default() -> Self {
        // The editor opens on a 1x2 symbol
        Self {
            width: 1,
            height: 2,
        }
    }
}

impl PatternDims {
    pub fn new(width: u32, height: u32) -> GlyphResult<Self> {
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(GlyphError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of addressable elements: `(2w)(2h)*5 - 4(w+h) + 1`
    pub fn element_count(&self) -> usize {
        let w = self.width as usize;
        let h = self.height as usize;
        (2 * w) * (2 * h) * 5 - 4 * (w + h) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            PatternDims::new(0, 3),
            Err(GlyphError::InvalidDimensions { width: 0, height: 3 })
        );
        assert!(PatternDims::new(2, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(PatternDims::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert_eq!(
            PatternDims::new(MAX_DIMENSION + 1, 1),
            Err(GlyphError::InvalidDimensions {
                width: MAX_DIMENSION + 1,
                height: 1
            })
        );
        assert!(PatternDims::new(1, u32::MAX).is_err());
        assert!(PatternDims::new(u32::MAX, u32::MAX).is_err());
        assert!(serde_json::from_str::<PatternDims>(r#"{"width":4294967295,"height":1}"#).is_err());
    }

    #[test]
    fn test_element_count_formula() {
        assert_eq!(PatternDims::new(1, 1).unwrap().element_count(), 13);
        assert_eq!(PatternDims::default().element_count(), 29);
        assert_eq!(PatternDims::new(3, 2).unwrap().element_count(), 101);
    }

    #[test]
    fn test_deserialize_validates() {
        let dims: PatternDims = serde_json::from_str(r#"{"width":2,"height":3}"#).unwrap();
        assert_eq!((dims.width(), dims.height()), (2, 3));
        assert!(serde_json::from_str::<PatternDims>(r#"{"width":0,"height":3}"#).is_err());
    }
}
