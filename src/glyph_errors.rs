use crate::config::MAX_DIMENSION;
use log::warn;
use std::fmt;

/// Errors raised while parsing hex digits or canonical pattern strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A character outside `[0-9a-fA-F]` in the hex payload
    InvalidHexDigit { ch: char, position: usize },
    /// The hex payload carries fewer bits than the pattern needs
    InsufficientBits { expected: usize, available: usize },
    /// The canonical string is missing the given separator
    MissingSeparator(char),
    /// Width or height in the canonical header is not a positive integer
    InvalidDimension(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidHexDigit { ch, position } => {
                write!(f, "Invalid hex digit '{}' at position {}", ch, position)
            }
            FormatError::InsufficientBits {
                expected,
                available,
            } => write!(
                f,
                "Hex payload too short: need {} bits, got {}",
                expected, available
            ),
            FormatError::MissingSeparator(sep) => {
                write!(f, "Malformed pattern string: missing '{}'", sep)
            }
            FormatError::InvalidDimension(raw) => {
                write!(f, "Invalid dimension '{}': expected a positive integer", raw)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Error type for pattern, session and configuration operations
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphError {
    /// Width or height was zero or above `MAX_DIMENSION`
    InvalidDimensions { width: u32, height: u32 },
    /// Element index outside `[0, len)`
    IndexOutOfRange { index: usize, len: usize },
    /// A bit sequence does not match the element count of its dimensions
    LengthMismatch { expected: usize, actual: usize },
    /// Random fill density outside `[0, 1]`
    InvalidDensity(f64),
    /// Hex or canonical string could not be parsed
    Format(FormatError),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::InvalidDimensions { width, height } => write!(
                f,
                "Invalid pattern dimensions {}x{} - width and height must be within 1..={}",
                width, height, MAX_DIMENSION
            ),
            GlyphError::IndexOutOfRange { index, len } => write!(
                f,
                "Element index {} out of range - pattern has {} elements",
                index, len
            ),
            GlyphError::LengthMismatch { expected, actual } => write!(
                f,
                "Bit sequence has {} entries, expected {}",
                actual, expected
            ),
            GlyphError::InvalidDensity(density) => {
                write!(f, "Density {} must be within 0.0..=1.0", density)
            }
            GlyphError::Format(err) => write!(f, "Format error: {}", err),
            GlyphError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GlyphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlyphError::Format(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormatError> for GlyphError {
    fn from(err: FormatError) -> Self {
        GlyphError::Format(err)
    }
}

/// Result type alias for glyph operations
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Validate an element index against the pattern length
pub fn validate_index(index: usize, len: usize) -> GlyphResult<()> {
    if index >= len {
        warn!("Rejected element index {} (pattern has {} elements)", index, len);
        Err(GlyphError::IndexOutOfRange { index, len })
    } else {
        Ok(())
    }
}

/// Validate a random fill density
pub fn validate_density(density: f64) -> GlyphResult<()> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        Err(GlyphError::InvalidDensity(density))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index_bounds() {
        assert!(validate_index(0, 13).is_ok());
        assert!(validate_index(12, 13).is_ok());
        assert_eq!(
            validate_index(13, 13),
            Err(GlyphError::IndexOutOfRange { index: 13, len: 13 })
        );
    }

    #[test]
    fn test_density_rejects_nan_and_out_of_range() {
        assert!(validate_density(0.0).is_ok());
        assert!(validate_density(1.0).is_ok());
        assert!(validate_density(1.5).is_err());
        assert!(validate_density(-0.1).is_err());
        assert!(validate_density(f64::NAN).is_err());
    }

    #[test]
    fn test_format_error_converts() {
        let err: GlyphError = FormatError::MissingSeparator(':').into();
        assert_eq!(err, GlyphError::Format(FormatError::MissingSeparator(':')));
        assert!(err.to_string().contains("missing ':'"));
    }
}
