//! Range scaling between physical depth and the level domain.
//!
//! Depth samples arrive as raw 16-bit integers in sensor units. A
//! [`RangeScaler`] turns them into [`Level`](crate::Level)s for the hue ramp,
//! either linearly or in disparity space, and undoes that on decode.

mod error;
mod scaler;

pub use error::ScaleError;
pub use scaler::{DepthRange, RangeScaler, ScaleMode, CM_SCALE, INVERSE_EPSILON, MM_SCALE};
