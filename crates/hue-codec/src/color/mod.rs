//! Color triple types
//!
//! A hue-encoded depth sample is a plain 8-bit RGB triple. The codec itself
//! always reasons in R,G,B component order; [`ChannelOrder`] only describes
//! how a triple is laid out inside an interleaved byte buffer.
//!
//! # Example
//!
//! ```
//! use hue_codec::{ChannelOrder, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! assert_eq!(red.to_bytes(ChannelOrder::Rgb), [255, 0, 0]);
//! assert_eq!(red.to_bytes(ChannelOrder::Bgr), [0, 0, 255]);
//! ```

mod rgb;

pub use rgb::{Channel, ChannelOrder, Rgb};
