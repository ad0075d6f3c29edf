use crate::config::PatternDims;
use crate::glyph_errors::{validate_density, GlyphError, GlyphResult};
use serde::{Deserialize, Serialize};

/// Configuration for the glyph editor and its exporters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub pattern: PatternDims,
    pub export: ExportConfig,
    pub display: DisplayConfig,
}

/// SVG export styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Stroke color of active elements
    pub active_stroke: String,
    /// Stroke color of inactive elements, used when they are included
    pub inactive_stroke: String,
    /// Stroke width for lines and dot outlines
    pub stroke_width: u32,
    /// Fill color of dots
    pub dot_fill: String,
    /// Also emit inactive elements, reproducing the editing surface
    pub include_inactive: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            active_stroke: "black".to_string(),
            inactive_stroke: "lightgray".to_string(),
            stroke_width: 5,
            dot_fill: "white".to_string(),
            include_inactive: false,
        }
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color active elements in terminal output
    pub colored: bool,
    /// Print the character-cell preview after decoding
    pub show_preview: bool,
    /// Print the index of each listed element
    pub show_indices: bool,
    /// Default density for random patterns
    pub random_density: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            colored: true,
            show_preview: true,
            show_indices: true,
            random_density: 0.25,
        }
    }
}

impl GlyphConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: GlyphConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from `GLYPH_*` environment variables
    pub fn apply_env(&mut self) {
        let width = env_parse::<u32>("GLYPH_WIDTH").unwrap_or(self.pattern.width());
        let height = env_parse::<u32>("GLYPH_HEIGHT").unwrap_or(self.pattern.height());
        match PatternDims::new(width, height) {
            Ok(dims) => self.pattern = dims,
            Err(e) => log::warn!("Ignoring GLYPH_WIDTH/GLYPH_HEIGHT: {}", e),
        }

        if let Some(stroke_width) = env_parse::<u32>("GLYPH_STROKE_WIDTH") {
            self.export.stroke_width = stroke_width;
        }
        if let Ok(colored) = std::env::var("GLYPH_COLOR") {
            self.display.colored = colored.to_lowercase() == "true";
        }
        if let Ok(preview) = std::env::var("GLYPH_PREVIEW") {
            self.display.show_preview = preview.to_lowercase() == "true";
        }
        if let Some(density) = env_parse::<f64>("GLYPH_DENSITY") {
            self.display.random_density = density;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> GlyphResult<()> {
        if self.export.stroke_width == 0 {
            return Err(GlyphError::Config("Stroke width must be positive".into()));
        }
        if self.export.active_stroke.trim().is_empty() {
            return Err(GlyphError::Config("Active stroke color is empty".into()));
        }
        validate_density(self.display.random_density)?;
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_editor() {
        let config = GlyphConfig::default();
        assert_eq!((config.pattern.width(), config.pattern.height()), (1, 2));
        assert_eq!(config.export.stroke_width, 5);
        assert_eq!(config.export.active_stroke, "black");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GlyphConfig =
            serde_json::from_str(r#"{"pattern":{"width":3,"height":1},"export":{"stroke_width":2}}"#)
                .unwrap();
        assert_eq!(config.pattern.width(), 3);
        assert_eq!(config.export.stroke_width, 2);
        assert_eq!(config.export.dot_fill, "white");
        assert!(config.display.show_preview);
    }

    #[test]
    fn test_validate_rejects_zero_stroke() {
        let mut config = GlyphConfig::default();
        config.export.stroke_width = 0;
        assert!(matches!(config.validate(), Err(GlyphError::Config(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join(format!("glyph_config_{}.json", std::process::id()));
        let path = path.to_string_lossy().to_string();
        let mut config = GlyphConfig::default();
        config.display.colored = false;
        config.save_to_file(&path).unwrap();
        let loaded = GlyphConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }
}
