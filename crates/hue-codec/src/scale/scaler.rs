//! Depth <-> level scaling, linear or in disparity space.

use super::error::ScaleError;
use crate::ramp::Level;

/// Depth scale for raw samples in millimetres.
pub const MM_SCALE: f64 = 0.001;

/// Depth scale for raw samples in centimetres.
pub const CM_SCALE: f64 = 0.01;

/// Stand-in for a zero lower bound before it is inverted.
pub const INVERSE_EPSILON: f64 = 1e-9;

const LEVEL_MAX: f64 = Level::MAX.get() as f64;

/// How depth is spread over the level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleMode {
    /// Levels are evenly spaced in depth.
    #[default]
    Linear,
    /// Levels are evenly spaced in disparity (1/depth). Step size grows with
    /// depth, giving roughly constant relative error at the cost of coarser
    /// absolute precision up close.
    Inverse,
}

/// Physical depth window mapped onto the level domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthRange {
    /// Nearest depth in metres (maps to level 0 / the low end of the ramp).
    pub depth_min_m: f64,
    /// Farthest depth in metres.
    pub depth_max_m: f64,
    /// Metres per raw integer unit, e.g. [`MM_SCALE`].
    pub depth_scale: f64,
    pub mode: ScaleMode,
}

impl DepthRange {
    pub fn new(depth_min_m: f64, depth_max_m: f64, depth_scale: f64, mode: ScaleMode) -> Self {
        Self {
            depth_min_m,
            depth_max_m,
            depth_scale,
            mode,
        }
    }

    fn validate(&self) -> Result<(), ScaleError> {
        for (field, value) in [
            ("depth_min_m", self.depth_min_m),
            ("depth_max_m", self.depth_max_m),
            ("depth_scale", self.depth_scale),
        ] {
            if !value.is_finite() {
                return Err(ScaleError::NonFinite { field, value });
            }
        }
        if self.depth_scale <= 0.0 {
            return Err(ScaleError::NonPositiveScale(self.depth_scale));
        }
        if self.depth_min_m < 0.0 {
            return Err(ScaleError::NegativeBound {
                field: "depth_min_m",
                value: self.depth_min_m,
            });
        }
        if self.depth_max_m <= self.depth_min_m {
            return Err(ScaleError::EmptyRange {
                depth_min_m: self.depth_min_m,
                depth_max_m: self.depth_max_m,
            });
        }
        Ok(())
    }
}

/// Maps raw depth samples onto quantized levels and back.
///
/// Bounds are converted to raw units (and inverted in [`ScaleMode::Inverse`])
/// once at construction. In inverse mode the derived range is negative;
/// the formulas work with either sign.
///
/// # Example
///
/// ```
/// use hue_codec::{DepthRange, Level, RangeScaler, ScaleMode};
///
/// let scaler = RangeScaler::new(DepthRange::new(0.0, 1530.0, 1.0, ScaleMode::Linear)).unwrap();
/// let level = scaler.forward(700);
/// assert_eq!(level.get(), 700);
/// assert_eq!(scaler.inverse(level), 700);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RangeScaler {
    range: DepthRange,
    min_u: f64,
    max_u: f64,
    range_u: f64,
    degenerate: bool,
}

impl RangeScaler {
    pub fn new(range: DepthRange) -> Result<Self, ScaleError> {
        range.validate()?;

        let mut min_u = range.depth_min_m / range.depth_scale;
        let mut max_u = range.depth_max_m / range.depth_scale;
        let mut degenerate = false;

        if range.mode == ScaleMode::Inverse {
            if min_u == 0.0 {
                min_u = INVERSE_EPSILON;
                degenerate = true;
            }
            min_u = 1.0 / min_u;
            max_u = 1.0 / max_u;
        }

        Ok(Self {
            range,
            min_u,
            max_u,
            range_u: max_u - min_u,
            degenerate,
        })
    }

    /// Parameters this scaler was built from.
    #[inline]
    pub fn range(&self) -> &DepthRange {
        &self.range
    }

    #[inline]
    pub fn mode(&self) -> ScaleMode {
        self.range.mode
    }

    /// Lower bound in raw units (inverted in inverse mode).
    #[inline]
    pub fn min_u(&self) -> f64 {
        self.min_u
    }

    /// Upper bound in raw units (inverted in inverse mode).
    #[inline]
    pub fn max_u(&self) -> f64 {
        self.max_u
    }

    /// `max_u - min_u`; negative in inverse mode.
    #[inline]
    pub fn range_u(&self) -> f64 {
        self.range_u
    }

    /// `true` when an inverse-mode zero minimum was replaced by
    /// [`INVERSE_EPSILON`]. Such a range squeezes almost every depth into
    /// the top few levels.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Quantize a raw depth sample. Zero stays invalid; everything else is
    /// clamped into `0..=1530`.
    #[inline]
    pub fn forward(&self, raw: u16) -> Level {
        if raw == 0 {
            return Level::INVALID;
        }
        let d = match self.range.mode {
            ScaleMode::Linear => raw as f64,
            ScaleMode::Inverse => 1.0 / raw as f64,
        };
        let scaled = ((d - self.min_u) / self.range_u).clamp(0.0, 1.0);
        Level::new_unchecked((LEVEL_MAX * scaled).round() as u16)
    }

    /// Reconstruct a raw depth sample from a level. Level 0 gives 0.
    #[inline]
    pub fn inverse(&self, level: Level) -> u16 {
        if !level.is_valid() {
            return 0;
        }
        let d = self.min_u + self.range_u * level.get() as f64 / LEVEL_MAX;
        let d = match self.range.mode {
            ScaleMode::Linear => d,
            ScaleMode::Inverse => 1.0 / d,
        };
        d.round().clamp(0.0, u16::MAX as f64) as u16
    }
}
