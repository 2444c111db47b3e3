//! The hue ramp: quantized level <-> color triple.
//!
//! This is the value-level codec. It knows nothing about depth units or
//! images; it maps the integer domain `0..=1530` onto a rainbow of 8-bit
//! colors (black, red, yellow, green, cyan, blue, purple, back toward red)
//! and inverts it.

mod decode;
mod level;
mod segment;
mod table;

pub use decode::{decode, decode_bytes, BLACK_THRESHOLD};
pub use level::{Level, LevelOutOfRange};
pub use segment::{encode, encode_value, Segment, Sweep, SEGMENTS, SEGMENT_LEN};
pub use table::EncodeTable;
