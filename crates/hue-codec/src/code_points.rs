//! Known level/color pairs.
//!
//! These are the segment corners of the ramp. They are shared with the
//! RealSense hue colorizer, so a mismatch here means encoded frames are no
//! longer interchangeable with that pipeline.

use crate::color::Rgb;

/// `(level, color)` pairs in R,G,B order.
pub static CODE_POINTS: [(u16, Rgb); 7] = [
    (0, Rgb::new(0, 0, 0)),
    (1, Rgb::new(255, 0, 0)),
    (256, Rgb::new(255, 255, 0)),
    (511, Rgb::new(0, 255, 0)),
    (766, Rgb::new(0, 255, 255)),
    (1021, Rgb::new(0, 0, 255)),
    (1276, Rgb::new(255, 0, 255)),
];
