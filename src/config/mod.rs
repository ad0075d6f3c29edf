pub mod pattern_config;

pub use pattern_config::{PatternDims, MAX_DIMENSION};
