//! Segment table and the forward (level to color) direction.
//!
//! Levels `1..=1530` are split into six segments of 255 levels each. Inside
//! a segment one channel sweeps linearly while the other two stay fixed, one
//! at full intensity and one at zero. Level 0 is black.
//!
//! ```text
//!    level    ||  R      | G      | B
//! ------------++---------+--------+--------
//!          0  ||  0      | 0      | 0        black
//!    1 -  255 ||  255    | v-1    | 0        red, green rising
//!  256 -  510 ||  511-v  | 255    | 0        green, red falling
//!  511 -  765 ||  0      | 255    | v-511    green, blue rising
//!  766 - 1020 ||  0      | 1021-v | 255      blue, green falling
//! 1021 - 1275 ||  v-1021 | 0      | 255      blue, red rising
//! 1276 - 1530 ||  255    | 0      | 1531-v   red, blue falling
//! ```

use super::level::Level;
use crate::color::{Channel, Rgb};

/// Direction the swept channel moves as the level increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Swept channel goes 0 -> 255.
    Rising,
    /// Swept channel goes 255 -> 0.
    Falling,
}

/// One linear piece of the hue ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// First level covered by this segment (inclusive).
    pub first: u16,
    /// Color with the swept channel zeroed.
    pub held: Rgb,
    /// Channel that varies across the segment.
    pub swept: Channel,
    pub sweep: Sweep,
}

/// Levels covered by each segment.
pub const SEGMENT_LEN: u16 = 255;

/// The six ramp segments in level order.
pub static SEGMENTS: [Segment; 6] = [
    Segment {
        first: 1,
        held: Rgb::new(255, 0, 0),
        swept: Channel::Green,
        sweep: Sweep::Rising,
    },
    Segment {
        first: 256,
        held: Rgb::new(0, 255, 0),
        swept: Channel::Red,
        sweep: Sweep::Falling,
    },
    Segment {
        first: 511,
        held: Rgb::new(0, 255, 0),
        swept: Channel::Blue,
        sweep: Sweep::Rising,
    },
    Segment {
        first: 766,
        held: Rgb::new(0, 0, 255),
        swept: Channel::Green,
        sweep: Sweep::Falling,
    },
    Segment {
        first: 1021,
        held: Rgb::new(0, 0, 255),
        swept: Channel::Red,
        sweep: Sweep::Rising,
    },
    Segment {
        first: 1276,
        held: Rgb::new(255, 0, 0),
        swept: Channel::Blue,
        sweep: Sweep::Falling,
    },
];

impl Segment {
    /// Last level covered by this segment (inclusive).
    #[inline]
    pub const fn last(&self) -> u16 {
        self.first + SEGMENT_LEN - 1
    }

    #[inline]
    pub const fn contains(&self, level: u16) -> bool {
        level >= self.first && level <= self.last()
    }

    /// Color for a level inside this segment.
    #[inline]
    pub fn color(&self, level: u16) -> Rgb {
        debug_assert!(self.contains(level));
        let offset = (level - self.first) as u8;
        let value = match self.sweep {
            Sweep::Rising => offset,
            Sweep::Falling => u8::MAX - offset,
        };
        self.held.with_channel(self.swept, value)
    }

    /// Segment covering a non-zero level.
    #[inline]
    pub fn for_level(level: Level) -> Option<&'static Segment> {
        if !level.is_valid() {
            return None;
        }
        SEGMENTS.get(((level.get() - 1) / SEGMENT_LEN) as usize)
    }
}

/// Encode a level as its hue color.
///
/// # Example
///
/// ```
/// use hue_codec::{encode, Level, Rgb};
///
/// let yellow = encode(Level::new(256).unwrap());
/// assert_eq!(yellow, Rgb::new(255, 255, 0));
/// ```
#[inline]
pub fn encode(level: Level) -> Rgb {
    match Segment::for_level(level) {
        Some(segment) => segment.color(level.get()),
        None => Rgb::BLACK,
    }
}

/// Encode a raw integer level.
///
/// Values above 1530 are rejected rather than mapped to an arbitrary color.
#[inline]
pub fn encode_value(value: u16) -> Option<Rgb> {
    Level::new(value).map(encode)
}
