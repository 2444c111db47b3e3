//! Precomputed encode lookup table.
//!
//! Encoding a whole frame goes through a table of all 1531 colors instead
//! of walking the segment list per pixel. The table stores ready-to-copy
//! bytes in the caller's channel order. Decoding is not tabulated; it is
//! a handful of compares on three bytes.

use super::level::Level;
use super::segment::encode;
use crate::color::{ChannelOrder, Rgb};

/// Level -> pixel bytes lookup table.
///
/// # Example
///
/// ```
/// use hue_codec::{ChannelOrder, EncodeTable, Level};
///
/// let table = EncodeTable::new(ChannelOrder::Bgr);
/// assert_eq!(table.bytes(Level::new(1).unwrap()), [0, 0, 255]);
/// ```
#[derive(Clone)]
pub struct EncodeTable {
    order: ChannelOrder,
    entries: Box<[[u8; 3]; Level::COUNT]>,
}

impl EncodeTable {
    /// Build the table for every level.
    pub fn new(order: ChannelOrder) -> Self {
        let mut entries = Box::new([[0u8; 3]; Level::COUNT]);
        for level in Level::all() {
            entries[level.index()] = encode(level).to_bytes(order);
        }
        Self { order, entries }
    }

    /// Byte order of the stored entries.
    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Pixel bytes for `level`.
    #[inline]
    pub fn bytes(&self, level: Level) -> [u8; 3] {
        self.entries[level.index()]
    }

    /// Color for `level`, independent of the stored byte order.
    #[inline]
    pub fn color(&self, level: Level) -> Rgb {
        Rgb::from_bytes(self.bytes(level), self.order)
    }

    #[inline]
    pub fn as_slice(&self) -> &[[u8; 3]] {
        &self.entries[..]
    }
}

impl std::fmt::Debug for EncodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodeTable")
            .field("order", &self.order)
            .field("entries", &self.entries.len())
            .finish()
    }
}
