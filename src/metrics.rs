//! Depth fidelity metrics.
//!
//! PSNR between an original depth map and its hue round trip, with the peak
//! taken from the codec's far limit. Pixels at or beyond that limit in
//! either image are left out; they are clamped by the encoder and would
//! otherwise dominate the error.

use crate::error::MetricError;
use crate::models::DepthImage;

/// Mean squared error over the pixels that took part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MseReport {
    pub mse: f64,
    /// Pixels below the peak in both images
    pub counted: usize,
}

fn check_pair(a: &DepthImage, b: &DepthImage) -> Result<(), MetricError> {
    if a.is_empty() || b.is_empty() {
        return Err(MetricError::Empty);
    }
    if a.width() != b.width() || a.height() != b.height() {
        return Err(MetricError::SizeMismatch {
            a_width: a.width(),
            a_height: a.height(),
            b_width: b.width(),
            b_height: b.height(),
        });
    }
    Ok(())
}

/// MSE over pixels where both samples are strictly below `max_intensity`.
///
/// Returns `mse == 0.0` when no pixel qualifies.
pub fn mse(a: &DepthImage, b: &DepthImage, max_intensity: f64) -> Result<MseReport, MetricError> {
    check_pair(a, b)?;

    let (sum, counted) = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&x, &y)| (x as f64, y as f64))
        .filter(|&(x, y)| x < max_intensity && y < max_intensity)
        .fold((0.0f64, 0usize), |(sum, n), (x, y)| {
            let diff = x - y;
            (sum + diff * diff, n + 1)
        });

    let mse = if counted == 0 { 0.0 } else { sum / counted as f64 };
    Ok(MseReport { mse, counted })
}

/// Peak signal-to-noise ratio in dB.
///
/// The peak is `depth_max_m / depth_scale` raw units. Identical images (or
/// no comparable pixels) give `f64::INFINITY`.
///
/// # Example
///
/// ```
/// use depth_hue::{metrics, DepthImage};
///
/// let a = DepthImage::from_raw(2, 1, vec![1000, 2000]).unwrap();
/// let b = DepthImage::from_raw(2, 1, vec![1001, 2000]).unwrap();
///
/// assert!(metrics::psnr(&a, &a, 5.0, 0.001).unwrap().is_infinite());
/// assert!(metrics::psnr(&a, &b, 5.0, 0.001).unwrap() > 70.0);
/// ```
pub fn psnr(
    a: &DepthImage,
    b: &DepthImage,
    depth_max_m: f64,
    depth_scale: f64,
) -> Result<f64, MetricError> {
    let peak = depth_max_m / depth_scale;
    if !peak.is_finite() || peak <= 0.0 {
        return Err(MetricError::InvalidPeak(peak));
    }

    let report = mse(a, b, peak)?;
    if report.mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(20.0 * peak.log10() - 10.0 * report.mse.log10())
}
