//! Synthetic depth frames for tests and calibration.

use crate::models::DepthImage;

/// Row-major ramp starting at `vmin` and advancing `step` per pixel.
///
/// Each sample is `round(vmin + step * i)`, saturated into `u16`.
pub fn depth_ramp_step(width: usize, height: usize, vmin: f64, step: f64) -> DepthImage {
    let data = (0..width * height)
        .map(|i| (vmin + step * i as f64).round().clamp(0.0, u16::MAX as f64) as u16)
        .collect();
    DepthImage::from_raw(width, height, data).unwrap_or_default()
}

/// Ramp spreading `vmin..vmax` evenly over all pixels.
///
/// # Example
///
/// ```
/// use depth_hue::synthetic::depth_ramp;
///
/// // 40x40 pixels cover every level of an identity-scaled codec.
/// let depth = depth_ramp(40, 40, 0.0, 1531.0);
/// assert_eq!(depth.pixels()[0], 0);
/// assert_eq!(*depth.pixels().last().unwrap(), 1530);
/// ```
pub fn depth_ramp(width: usize, height: usize, vmin: f64, vmax: f64) -> DepthImage {
    let count = width * height;
    let step = if count == 0 {
        0.0
    } else {
        (vmax - vmin) / count as f64
    };
    depth_ramp_step(width, height, vmin, step)
}
