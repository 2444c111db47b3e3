//! RGB triple and byte layout

use std::fmt;

/// One of the three color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Byte layout of an interleaved 3-channel pixel.
///
/// `Rgb` is the canonical order used throughout this crate. `Bgr` is the
/// layout OpenCV-style pipelines hand around; selecting it only swaps the
/// first and last byte on the way in and out of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ChannelOrder {
    /// Byte offset of `channel` within one pixel.
    #[inline]
    pub const fn offset(self, channel: Channel) -> usize {
        match (self, channel) {
            (_, Channel::Green) => 1,
            (ChannelOrder::Rgb, Channel::Red) | (ChannelOrder::Bgr, Channel::Blue) => 0,
            (ChannelOrder::Rgb, Channel::Blue) | (ChannelOrder::Bgr, Channel::Red) => 2,
        }
    }
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelOrder::Rgb => write!(f, "rgb"),
            ChannelOrder::Bgr => write!(f, "bgr"),
        }
    }
}

/// An 8-bit color triple in R,G,B component order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black, the color of the invalid-depth level.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Read a triple from three bytes laid out in `order`.
    ///
    /// # Example
    /// ```
    /// use hue_codec::{ChannelOrder, Rgb};
    /// let cyan = Rgb::from_bytes([255, 255, 0], ChannelOrder::Bgr);
    /// assert_eq!(cyan, Rgb::new(0, 255, 255));
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3], order: ChannelOrder) -> Self {
        match order {
            ChannelOrder::Rgb => Self::new(bytes[0], bytes[1], bytes[2]),
            ChannelOrder::Bgr => Self::new(bytes[2], bytes[1], bytes[0]),
        }
    }

    /// Write the triple as three bytes laid out in `order`.
    #[inline]
    pub const fn to_bytes(self, order: ChannelOrder) -> [u8; 3] {
        match order {
            ChannelOrder::Rgb => [self.r, self.g, self.b],
            ChannelOrder::Bgr => [self.b, self.g, self.r],
        }
    }

    /// Value of a single channel.
    #[inline]
    pub const fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Copy of the triple with `channel` replaced by `value`.
    #[inline]
    pub const fn with_channel(self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => Self::new(value, self.g, self.b),
            Channel::Green => Self::new(self.r, value, self.b),
            Channel::Blue => Self::new(self.r, self.g, value),
        }
    }

    /// Sum of the three channels, the "energy" used by the black threshold.
    #[inline]
    pub const fn sum(self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }
}

impl From<[u8; 3]> for Rgb {
    /// Interprets the array in R,G,B order.
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes, ChannelOrder::Rgb)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_bytes(ChannelOrder::Rgb)
    }
}
