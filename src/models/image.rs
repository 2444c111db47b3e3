//! Depth and color image buffers.
//!
//! Both are plain row-major buffers with their dimensions attached. A
//! [`DepthImage`] holds one raw `u16` sample per pixel (0 = no depth); a
//! [`ColorImage`] holds three interleaved bytes per pixel in the layout
//! given by its [`ChannelOrder`].

use crate::error::ImageError;
use hue_codec::{ChannelOrder, Rgb};

fn pixel_count(width: usize, height: usize) -> Result<usize, ImageError> {
    width
        .checked_mul(height)
        .ok_or(ImageError::DimensionOverflow { width, height })
}

fn checked_len(
    width: usize,
    height: usize,
    per_pixel: usize,
    actual: usize,
    unit: &'static str,
) -> Result<usize, ImageError> {
    let expected = pixel_count(width, height)?
        .checked_mul(per_pixel)
        .ok_or(ImageError::DimensionOverflow { width, height })?;
    if expected != actual {
        return Err(ImageError::LengthMismatch {
            width,
            height,
            expected,
            actual,
            unit,
        });
    }
    Ok(expected)
}

/// Single-channel 16-bit depth map.
///
/// # Example
///
/// ```
/// use depth_hue::DepthImage;
///
/// let depth = DepthImage::from_raw(2, 1, vec![1200, 0]).unwrap();
/// assert_eq!(depth.get(0, 0), Some(1200));
/// assert_eq!(depth.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepthImage {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl DepthImage {
    /// Zero-filled (all invalid) image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Wrap existing samples. `data.len()` must equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u16>) -> Result<Self, ImageError> {
        checked_len(width, height, 1, data.len(), "samples")?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Read a packed little-endian Z16 frame (two bytes per sample).
    ///
    /// A buffer with any other element width fails the length check.
    pub fn from_le_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ImageError> {
        checked_len(width, height, 2, bytes.len(), "bytes")?;
        let data = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Packed little-endian Z16 bytes.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major samples.
    #[inline]
    pub fn pixels(&self) -> &[u16] {
        &self.data
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u16] {
        &mut self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    pub fn into_raw(self) -> Vec<u16> {
        self.data
    }

    /// Resize to `width x height`, keeping the allocation when the pixel
    /// count already matches. Contents are unspecified afterwards.
    pub(crate) fn reshape(&mut self, width: usize, height: usize) {
        let len = width * height;
        if self.data.len() != len {
            self.data = vec![0; len];
        }
        self.width = width;
        self.height = height;
    }
}

/// Three-channel 8-bit image, interleaved.
///
/// # Example
///
/// ```
/// use depth_hue::ColorImage;
/// use hue_codec::{ChannelOrder, Rgb};
///
/// let image = ColorImage::from_raw(1, 1, ChannelOrder::Bgr, vec![255, 0, 0]).unwrap();
/// assert_eq!(image.get(0, 0), Some(Rgb::new(0, 0, 255)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorImage {
    width: usize,
    height: usize,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl ColorImage {
    /// Black image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    pub fn new(width: usize, height: usize, order: ChannelOrder) -> Self {
        Self {
            width,
            height,
            order,
            data: vec![0; width * height * 3],
        }
    }

    /// Wrap interleaved bytes. `data.len()` must equal `width * height * 3`.
    pub fn from_raw(
        width: usize,
        height: usize,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        checked_len(width, height, 3, data.len(), "bytes")?;
        Ok(Self {
            width,
            height,
            order,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Interleaved pixel bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 3;
        let px = self.data.get(i..i + 3)?;
        Some(Rgb::from_bytes([px[0], px[1], px[2]], self.order))
    }

    /// Copy of this image with its bytes laid out in `order`.
    pub fn to_order(&self, order: ChannelOrder) -> ColorImage {
        let mut out = self.clone();
        if order != self.order {
            for px in out.data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            out.order = order;
        }
        out
    }

    /// Resize and relabel in place, keeping the allocation when the byte
    /// count already matches. Contents are unspecified afterwards.
    pub(crate) fn reshape(&mut self, width: usize, height: usize, order: ChannelOrder) {
        let len = width * height * 3;
        if self.data.len() != len {
            self.data = vec![0; len];
        }
        self.width = width;
        self.height = height;
        self.order = order;
    }
}
