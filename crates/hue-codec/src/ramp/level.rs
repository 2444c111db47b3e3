//! Quantized depth level

use std::fmt;

/// A quantized depth level in `0..=1530`.
///
/// Level 0 is reserved for "no valid depth" and encodes to black. Every
/// other level maps to exactly one color on the hue ramp.
///
/// # Example
///
/// ```
/// use hue_codec::Level;
///
/// assert_eq!(Level::new(1530), Some(Level::MAX));
/// assert_eq!(Level::new(1531), None);
/// assert!(!Level::INVALID.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(u16);

impl Level {
    /// The invalid-depth sentinel.
    pub const INVALID: Level = Level(0);

    /// Highest encodable level.
    pub const MAX: Level = Level(1530);

    /// Number of distinct levels, including the sentinel.
    pub const COUNT: usize = Self::MAX.0 as usize + 1;

    /// Returns `None` for values above [`Level::MAX`].
    #[inline]
    pub const fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX.0 {
            Some(Level(value))
        } else {
            None
        }
    }

    /// Caller guarantees `value <= 1530`.
    #[inline]
    pub(crate) const fn new_unchecked(value: u16) -> Self {
        debug_assert!(value <= Self::MAX.0);
        Level(value)
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// `false` only for the invalid-depth sentinel.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }

    /// Table index for this level.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate all levels from 0 to 1530.
    pub fn all() -> impl DoubleEndedIterator<Item = Level> + ExactSizeIterator {
        (0..=Self::MAX.0).map(Level)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Level> for u16 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Error for a raw value that does not fit the level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelOutOfRange(pub u16);

impl fmt::Display for LevelOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "level {} is outside the encodable range 0..={}",
            self.0,
            Level::MAX.0
        )
    }
}

impl std::error::Error for LevelOutOfRange {}

impl TryFrom<u16> for Level {
    type Error = LevelOutOfRange;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Level::new(value).ok_or(LevelOutOfRange(value))
    }
}
