//! Error type for range scaler construction

use std::fmt;

/// Rejected depth range parameters.
///
/// A zero minimum in inverse mode is not an error; it is handled by
/// substituting a tiny epsilon (see [`RangeScaler::is_degenerate`](super::RangeScaler::is_degenerate)).
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Name of the offending parameter
        field: &'static str,
        value: f64,
    },
    /// Depth bounds must not be negative.
    NegativeBound {
        field: &'static str,
        value: f64,
    },
    /// Units per raw integer must be strictly positive.
    NonPositiveScale(f64),
    /// The maximum must lie above the minimum.
    EmptyRange {
        depth_min_m: f64,
        depth_max_m: f64,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::NonFinite { field, value } => {
                write!(f, "{} must be finite, got {}", field, value)
            }
            ScaleError::NegativeBound { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ScaleError::NonPositiveScale(scale) => {
                write!(f, "depth scale must be positive, got {}", scale)
            }
            ScaleError::EmptyRange {
                depth_min_m,
                depth_max_m,
            } => {
                write!(
                    f,
                    "depth range is empty: max {} m is not above min {} m",
                    depth_max_m, depth_min_m
                )
            }
        }
    }
}

impl std::error::Error for ScaleError {}
