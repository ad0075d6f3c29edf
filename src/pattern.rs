// Pattern - one glyph: its dimensions plus one activation bit per element
//
// Canonical text form is "<width>,<height>:<hex>", e.g. "1,1:1400".

use crate::codec::{decode_hex, encode_hex};
use crate::config::PatternDims;
use crate::glyph_errors::{validate_density, validate_index, FormatError, GlyphError, GlyphResult};
use crate::grid::{self, Element};
use log::debug;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    dims: PatternDims,
    bits: Vec<bool>,
}

impl Pattern {
    /// Create an empty pattern with every element inactive
    pub fn new(dims: PatternDims) -> Self {
        Self {
            dims,
            bits: vec![false; dims.element_count()],
        }
    }

    /// Build a pattern from an existing activation sequence
    pub fn from_bits(dims: PatternDims, bits: Vec<bool>) -> GlyphResult<Self> {
        let expected = dims.element_count();
        if bits.len() != expected {
            return Err(GlyphError::LengthMismatch {
                expected,
                actual: bits.len(),
            });
        }
        Ok(Self { dims, bits })
    }

    /// Decode the hex payload for the given dimensions
    pub fn from_hex(dims: PatternDims, hex: &str) -> GlyphResult<Self> {
        let bits = decode_hex(hex, dims.element_count())?;
        Ok(Self { dims, bits })
    }

    /// Random pattern where each element is active with probability `density`
    pub fn random<R: Rng + ?Sized>(dims: PatternDims, density: f64, rng: &mut R) -> GlyphResult<Self> {
        validate_density(density)?;
        let bits = (0..dims.element_count())
            .map(|_| rng.gen_bool(density))
            .collect();
        Ok(Self { dims, bits })
    }

    pub fn dims(&self) -> PatternDims {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn is_active(&self, index: usize) -> GlyphResult<bool> {
        validate_index(index, self.bits.len())?;
        Ok(self.bits[index])
    }

    pub fn set(&mut self, index: usize, active: bool) -> GlyphResult<()> {
        validate_index(index, self.bits.len())?;
        self.bits[index] = active;
        Ok(())
    }

    /// Flip one element in place, returning its new state
    pub fn toggle(&mut self, index: usize) -> GlyphResult<bool> {
        validate_index(index, self.bits.len())?;
        self.bits[index] = !self.bits[index];
        debug!("Toggled element {} -> {}", index, self.bits[index]);
        Ok(self.bits[index])
    }

    /// Copy of this pattern with one element flipped
    pub fn toggled(&self, index: usize) -> GlyphResult<Pattern> {
        let mut next = self.clone();
        next.toggle(index)?;
        Ok(next)
    }

    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|bit| *bit = false);
    }

    pub fn active_count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
            .collect()
    }

    /// Geometry of every active element, paired with its index
    pub fn active_elements(&self) -> Vec<(usize, Element)> {
        grid::elements(&self.dims)
            .zip(self.bits.iter())
            .enumerate()
            .filter_map(|(i, (element, &bit))| bit.then_some((i, element)))
            .collect()
    }

    /// Every element with its activation state
    pub fn elements_with_state(&self) -> impl Iterator<Item = (usize, Element, bool)> + '_ {
        grid::elements(&self.dims)
            .zip(self.bits.iter().copied())
            .enumerate()
            .map(|(i, (element, bit))| (i, element, bit))
    }

    pub fn to_hex(&self) -> String {
        encode_hex(&self.bits)
    }

    pub fn to_canonical(&self) -> String {
        self.to_string()
    }

    pub fn parse_canonical(s: &str) -> Result<Self, FormatError> {
        let (header, hex) = s.trim().split_once(':').ok_or(FormatError::MissingSeparator(':'))?;
        let (w, h) = header.split_once(',').ok_or(FormatError::MissingSeparator(','))?;
        let dims = PatternDims::new(parse_dimension(w)?, parse_dimension(h)?)
            .map_err(|_| FormatError::InvalidDimension(header.to_string()))?;
        let bits = decode_hex(hex.trim(), dims.element_count())?;
        Ok(Self { dims, bits })
    }
}

fn parse_dimension(raw: &str) -> Result<u32, FormatError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(FormatError::InvalidDimension(raw.trim().to_string())),
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}:{}",
            self.dims.width(),
            self.dims.height(),
            self.to_hex()
        )
    }
}

impl FromStr for Pattern {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse_canonical(s)
    }
}

impl serde::Serialize for Pattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Pattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
