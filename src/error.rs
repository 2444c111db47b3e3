use hue_codec::ScaleError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HueError {
    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Invalid depth range: {0}")]
    Range(#[from] ScaleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ImageError {
    #[error("Buffer length mismatch for {width}x{height}: expected {expected} {unit}, got {actual}")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
        unit: &'static str,
    },

    #[error("Dimensions overflow: {width}x{height}")]
    DimensionOverflow { width: usize, height: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("No default profile configured")]
    NoDefaultProfile,
}

#[derive(Debug, Error, PartialEq)]
pub enum MetricError {
    #[error("Cannot compare empty depth images")]
    Empty,

    #[error("Size mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    SizeMismatch {
        a_width: usize,
        a_height: usize,
        b_width: usize,
        b_height: usize,
    },

    #[error("Invalid peak intensity: {0}")]
    InvalidPeak(f64),
}
