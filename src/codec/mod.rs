//! Image-level hue codec.
//!
//! [`HueCodec`] applies the range scaler and the hue ramp from `hue_codec`
//! to every pixel of a frame.

mod image_codec;
mod rows;

pub use image_codec::HueCodec;
