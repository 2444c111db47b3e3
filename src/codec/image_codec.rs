//! Whole-image hue codec.

use super::rows::{decode_rows, encode_rows};
use crate::error::HueError;
use crate::models::{CodecConfig, ColorImage, DepthImage};
use hue_codec::{decode, ChannelOrder, EncodeTable, RangeScaler, Rgb, ScaleMode};

/// Converts depth images to hue-encoded color images and back.
///
/// Construction derives the scaled depth bounds and builds the encode lookup
/// table once; after that the codec is immutable and can be shared across
/// threads. Decoding must use the same [`CodecConfig`] as encoding.
///
/// # Example
///
/// ```
/// use depth_hue::{CodecConfig, DepthImage, HueCodec};
///
/// let codec = HueCodec::new(CodecConfig::new(0.0, 1530.0, 1.0, false)).unwrap();
/// let depth = DepthImage::from_raw(3, 1, vec![0, 1, 1530]).unwrap();
///
/// let color = codec.encode(&depth).unwrap();
/// let back = codec.decode(&color).unwrap();
/// assert_eq!(back, depth);
/// ```
#[derive(Debug, Clone)]
pub struct HueCodec {
    config: CodecConfig,
    scaler: RangeScaler,
    table: EncodeTable,
}

impl HueCodec {
    pub fn new(config: CodecConfig) -> Result<Self, HueError> {
        let scaler = RangeScaler::new(config.depth_range())?;
        if scaler.is_degenerate() {
            tracing::warn!(
                depth_max_m = config.depth_max_m,
                "Inverse colorization with a zero minimum depth; nearly all depths will share the top levels"
            );
        }
        let table = EncodeTable::new(config.channel_order);

        tracing::debug!(
            depth_min_m = config.depth_min_m,
            depth_max_m = config.depth_max_m,
            depth_scale = config.depth_scale,
            inverse = config.inverse_colorization,
            order = %config.channel_order,
            "Created hue codec"
        );

        Ok(Self {
            config,
            scaler,
            table,
        })
    }

    /// Shorthand for [`HueCodec::new`] with RGB output.
    pub fn from_params(
        depth_min_m: f64,
        depth_max_m: f64,
        depth_scale: f64,
        inverse: bool,
    ) -> Result<Self, HueError> {
        Self::new(CodecConfig::new(
            depth_min_m,
            depth_max_m,
            depth_scale,
            inverse,
        ))
    }

    /// Byte layout for encoded images. Decoding accepts either layout.
    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        if order != self.table.order() {
            self.table = EncodeTable::new(order);
            self.config.channel_order = order;
        }
        self
    }

    #[inline]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    #[inline]
    pub fn depth_min_m(&self) -> f64 {
        self.config.depth_min_m
    }

    #[inline]
    pub fn depth_max_m(&self) -> f64 {
        self.config.depth_max_m
    }

    #[inline]
    pub fn depth_scale(&self) -> f64 {
        self.config.depth_scale
    }

    #[inline]
    pub fn mode(&self) -> ScaleMode {
        self.scaler.mode()
    }

    #[inline]
    pub fn channel_order(&self) -> ChannelOrder {
        self.table.order()
    }

    #[inline]
    pub fn scaler(&self) -> &RangeScaler {
        &self.scaler
    }

    /// Encode a single raw depth sample.
    #[inline]
    pub fn encode_sample(&self, raw: u16) -> Rgb {
        self.table.color(self.scaler.forward(raw))
    }

    /// Decode a single color back into a raw depth sample.
    #[inline]
    pub fn decode_sample(&self, color: Rgb) -> u16 {
        self.scaler.inverse(decode(color))
    }

    /// Encode into a freshly allocated color image.
    pub fn encode(&self, src: &DepthImage) -> Result<ColorImage, HueError> {
        let mut dst = ColorImage::default();
        self.encode_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Encode into `dst`, reusing its buffer when the size already fits.
    ///
    /// On error `dst` is left untouched.
    pub fn encode_into(&self, src: &DepthImage, dst: &mut ColorImage) -> Result<(), HueError> {
        ensure_not_empty(src.width(), src.height())?;

        dst.reshape(src.width(), src.height(), self.table.order());
        encode_rows(
            &self.scaler,
            &self.table,
            src.width(),
            src.pixels(),
            dst.as_bytes_mut(),
        );

        tracing::trace!(
            width = src.width(),
            height = src.height(),
            "Hue-encoded depth frame"
        );
        Ok(())
    }

    /// Decode into a freshly allocated depth image.
    pub fn decode(&self, src: &ColorImage) -> Result<DepthImage, HueError> {
        let mut dst = DepthImage::default();
        self.decode_into(src, &mut dst)?;
        Ok(dst)
    }

    /// Decode into `dst`, reusing its buffer when the size already fits.
    ///
    /// The source's own channel order is honoured. On error `dst` is left
    /// untouched.
    pub fn decode_into(&self, src: &ColorImage, dst: &mut DepthImage) -> Result<(), HueError> {
        ensure_not_empty(src.width(), src.height())?;

        dst.reshape(src.width(), src.height());
        decode_rows(
            &self.scaler,
            src.order(),
            src.width(),
            src.as_bytes(),
            dst.pixels_mut(),
        );

        tracing::trace!(
            width = src.width(),
            height = src.height(),
            "Hue-decoded color frame"
        );
        Ok(())
    }
}

fn ensure_not_empty(width: usize, height: usize) -> Result<(), HueError> {
    if width == 0 || height == 0 {
        return Err(HueError::EmptyImage { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_codec() -> HueCodec {
        HueCodec::from_params(0.0, 1530.0, 1.0, false).unwrap()
    }

    #[test]
    fn test_accessors() {
        let codec = HueCodec::from_params(0.3, 4.0, 0.001, true).unwrap();
        assert_eq!(codec.depth_min_m(), 0.3);
        assert_eq!(codec.depth_max_m(), 4.0);
        assert_eq!(codec.depth_scale(), 0.001);
        assert_eq!(codec.mode(), ScaleMode::Inverse);
        assert_eq!(codec.channel_order(), ChannelOrder::Rgb);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = HueCodec::from_params(2.0, 1.0, 0.001, false).unwrap_err();
        assert!(matches!(err, HueError::Range(_)));
    }

    #[test]
    fn test_zero_minimum_inverse_is_accepted() {
        let codec = HueCodec::from_params(0.0, 10.0, 0.001, true).unwrap();
        assert!(codec.scaler().is_degenerate());
    }

    #[test]
    fn test_encode_sample_code_points() {
        let codec = identity_codec();
        assert_eq!(codec.encode_sample(0), Rgb::new(0, 0, 0));
        assert_eq!(codec.encode_sample(1), Rgb::new(255, 0, 0));
        assert_eq!(codec.encode_sample(511), Rgb::new(0, 255, 0));
        assert_eq!(codec.encode_sample(1021), Rgb::new(0, 0, 255));
        assert_eq!(codec.decode_sample(Rgb::new(255, 0, 255)), 1276);
    }

    #[test]
    fn test_encode_uses_configured_order() {
        let codec = identity_codec().with_channel_order(ChannelOrder::Bgr);
        let depth = DepthImage::from_raw(1, 1, vec![1]).unwrap();
        let color = codec.encode(&depth).unwrap();
        assert_eq!(color.order(), ChannelOrder::Bgr);
        assert_eq!(color.as_bytes(), &[0, 0, 255]);
        assert_eq!(codec.config().channel_order, ChannelOrder::Bgr);
    }

    #[test]
    fn test_decode_honours_source_order() {
        let codec = identity_codec();
        let bgr = ColorImage::from_raw(1, 1, ChannelOrder::Bgr, vec![0, 0, 255]).unwrap();
        let rgb = ColorImage::from_raw(1, 1, ChannelOrder::Rgb, vec![0, 0, 255]).unwrap();
        assert_eq!(codec.decode(&bgr).unwrap().pixels(), &[1]);
        assert_eq!(codec.decode(&rgb).unwrap().pixels(), &[1021]);
    }

    #[test]
    fn test_empty_input_leaves_destination_untouched() {
        let codec = identity_codec();
        let mut color = ColorImage::from_raw(1, 1, ChannelOrder::Rgb, vec![1, 2, 3]).unwrap();
        let before = color.clone();
        let err = codec
            .encode_into(&DepthImage::new(0, 4), &mut color)
            .unwrap_err();
        assert!(matches!(err, HueError::EmptyImage { width: 0, height: 4 }));
        assert_eq!(color, before);

        let mut depth = DepthImage::from_raw(1, 1, vec![42]).unwrap();
        let before = depth.clone();
        assert!(codec
            .decode_into(&ColorImage::new(3, 0, ChannelOrder::Rgb), &mut depth)
            .is_err());
        assert_eq!(depth, before);
    }

    #[test]
    fn test_encode_into_reuses_matching_buffer() {
        let codec = identity_codec();
        let depth = DepthImage::from_raw(4, 4, (0..16).collect()).unwrap();
        let mut color = ColorImage::new(4, 4, ChannelOrder::Rgb);
        let ptr = color.as_bytes().as_ptr();
        codec.encode_into(&depth, &mut color).unwrap();
        assert_eq!(color.as_bytes().as_ptr(), ptr);
        assert_eq!(color, codec.encode(&depth).unwrap());
    }

    #[test]
    fn test_encode_into_resizes_mismatched_buffer() {
        let codec = identity_codec();
        let depth = DepthImage::from_raw(3, 2, vec![5; 6]).unwrap();
        let mut color = ColorImage::new(1, 1, ChannelOrder::Bgr);
        codec.encode_into(&depth, &mut color).unwrap();
        assert_eq!((color.width(), color.height()), (3, 2));
        assert_eq!(color.order(), ChannelOrder::Rgb);
        assert_eq!(color.as_bytes().len(), 18);
    }
}
