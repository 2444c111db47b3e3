//! hue-codec: reversible hue encoding of depth values
//!
//! Maps quantized 16-bit depth onto 8-bit RGB triples so depth maps can go
//! through image and video codecs built for color, and maps them back.
//!
//! # Quick Start
//!
//! ```
//! use hue_codec::{decode, encode, Level};
//!
//! for level in Level::all() {
//!     assert_eq!(decode(encode(level)), level);
//! }
//! ```
//!
//! # Layers
//!
//! - [`ramp`]: the value codec. [`Level`] (`0..=1530`) <-> [`Rgb`], plus the
//!   [`EncodeTable`] used for whole-frame encoding.
//! - [`scale`]: the [`RangeScaler`], which maps raw depth samples in sensor
//!   units onto levels, linearly or in disparity space.
//!
//! Image buffers, configuration and quality metrics live in the `depth-hue`
//! crate that sits on top of this one.
//!
//! # The Ramp
//!
//! Level 0 is black and means "no depth". Levels 1 to 1530 walk the hue
//! circle in six segments of 255 steps, each sweeping one channel while the
//! other two are pinned at 0 and 255:
//!
//! ```text
//! black | red -> yellow -> green -> cyan -> blue -> purple -> (red)
//!   0   | 1      256       511      766     1021    1276      1530
//! ```
//!
//! Only one channel ever changes between neighbouring levels, and the
//! decoder reads the level from channel differences rather than absolute
//! values, which keeps the mapping tolerant of mild compression noise.
//! Dark triples (channel sum at or below [`BLACK_THRESHOLD`]) decode to 0.

mod code_points;
pub mod color;
pub mod ramp;
pub mod scale;

pub use code_points::CODE_POINTS;
pub use color::{Channel, ChannelOrder, Rgb};
pub use ramp::{
    decode, decode_bytes, encode, encode_value, EncodeTable, Level, LevelOutOfRange, Segment,
    Sweep, BLACK_THRESHOLD, SEGMENTS,
};
pub use scale::{DepthRange, RangeScaler, ScaleError, ScaleMode, CM_SCALE, MM_SCALE};
