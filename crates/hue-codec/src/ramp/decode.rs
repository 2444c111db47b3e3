//! Inverse (color to level) direction.
//!
//! Decoding is closed form: pick the dominant channel, then read the level
//! off the difference of the other two. Ties between equal maxima resolve
//! red first, then green, then blue. That order is what makes the exact
//! segment boundaries (yellow, cyan, purple) land on the same level the
//! encoder produced them from.

use super::level::Level;
use crate::color::{ChannelOrder, Rgb};

/// Triples whose channel sum is at or below this decode to level 0.
///
/// Lossy codecs smear black into dark noise; treating low-energy triples
/// as invalid keeps that noise out of the depth map.
pub const BLACK_THRESHOLD: u16 = 128;

/// Decode a color into a level.
///
/// Total over all 2^24 triples. Anything dark or not on the ramp
/// collapses to [`Level::INVALID`] or the nearest level the formulas give.
///
/// # Example
///
/// ```
/// use hue_codec::{decode, Level, Rgb};
///
/// assert_eq!(decode(Rgb::new(0, 255, 0)).get(), 511);
/// assert_eq!(decode(Rgb::new(40, 40, 40)), Level::INVALID);
/// ```
#[inline]
pub fn decode(color: Rgb) -> Level {
    if color.sum() <= BLACK_THRESHOLD {
        return Level::INVALID;
    }

    let r = color.r as i32;
    let g = color.g as i32;
    let b = color.b as i32;

    let value = if r >= g && r >= b {
        if g >= b {
            g - b + 1
        } else {
            g - b + 1531
        }
    } else if g >= b {
        // g > r here, and g >= b
        b - r + 511
    } else {
        // b > r and b > g
        r - g + 1021
    };

    // Every branch above stays inside 1..=1530 for any byte input.
    Level::new_unchecked(value as u16)
}

/// Decode three bytes laid out in `order`.
#[inline]
pub fn decode_bytes(bytes: [u8; 3], order: ChannelOrder) -> Level {
    decode(Rgb::from_bytes(bytes, order))
}
