// Edit session - owns the pattern being edited
//
// Front ends call into the session on user actions and re-render from the
// returned state. Every operation either fully succeeds or leaves the current
// pattern untouched.

use crate::config::PatternDims;
use crate::display::text_preview;
use crate::export::export_svg;
use crate::glyph_config::GlyphConfig;
use crate::glyph_errors::GlyphResult;
use crate::grid::{self, Element};
use crate::pattern::Pattern;
use log::{debug, info, warn};
use rand::Rng;

pub struct EditSession {
    config: GlyphConfig,
    pattern: Pattern,
    /// Element geometry of `pattern.dims()`, rebuilt when the size changes
    geometry: Vec<Element>,
}

impl EditSession {
    pub fn new(config: GlyphConfig) -> Self {
        let pattern = Pattern::new(config.pattern);
        info!(
            "Started session with {}x{} pattern",
            config.pattern.width(),
            config.pattern.height()
        );
        let geometry = grid::generate(&config.pattern);
        Self {
            config,
            pattern,
            geometry,
        }
    }

    fn replace_pattern(&mut self, pattern: Pattern) {
        if pattern.dims() != self.pattern.dims() {
            self.geometry = grid::generate(&pattern.dims());
        }
        self.pattern = pattern;
    }

    pub fn config(&self) -> &GlyphConfig {
        &self.config
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Replace the current pattern with a blank one of the given size
    pub fn new_pattern(&mut self, width: u32, height: u32) -> GlyphResult<&Pattern> {
        let dims = PatternDims::new(width, height).inspect_err(|e| {
            warn!("Rejected new pattern: {}", e);
        })?;
        self.replace_pattern(Pattern::new(dims));
        info!(
            "New {}x{} pattern with {} elements",
            width,
            height,
            self.pattern.len()
        );
        Ok(&self.pattern)
    }

    /// Flip one element, returning its new state
    pub fn toggle(&mut self, index: usize) -> GlyphResult<bool> {
        self.pattern.toggle(index)
    }

    /// Geometry of the element at `index` in the current pattern
    pub fn element(&self, index: usize) -> Option<Element> {
        self.geometry.get(index).copied()
    }

    /// Geometry for the editing surface, in index order
    pub fn geometry(&self) -> &[Element] {
        &self.geometry
    }

    /// Replace the current pattern from its canonical string
    pub fn load(&mut self, canonical: &str) -> GlyphResult<&Pattern> {
        let pattern = canonical.parse::<Pattern>().inspect_err(|e| {
            warn!("Failed to load pattern '{}': {}", canonical, e);
        })?;
        debug!("Loaded pattern {}", pattern);
        self.replace_pattern(pattern);
        Ok(&self.pattern)
    }

    /// Replace the current pattern with a random one of the same size
    pub fn randomize<R: Rng + ?Sized>(&mut self, density: f64, rng: &mut R) -> GlyphResult<&Pattern> {
        self.pattern = Pattern::random(self.pattern.dims(), density, rng)?;
        debug!(
            "Randomized pattern: {} of {} active",
            self.pattern.active_count(),
            self.pattern.len()
        );
        Ok(&self.pattern)
    }

    pub fn clear(&mut self) {
        self.pattern.clear();
    }

    /// Canonical `<w>,<h>:<hex>` string of the current pattern
    pub fn export_hex(&self) -> String {
        self.pattern.to_canonical()
    }

    pub fn export_svg(&self) -> String {
        export_svg(&self.pattern, &self.config.export)
    }

    pub fn preview(&self) -> Vec<String> {
        text_preview(&self.pattern)
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(GlyphConfig::default())
    }
}
