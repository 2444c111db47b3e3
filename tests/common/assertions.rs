//! Assertion helpers for tests.

use depth_hue::DepthImage;
use pretty_assertions::assert_eq;

/// Largest absolute per-pixel difference
pub fn max_abs_error(a: &DepthImage, b: &DepthImage) -> u16 {
    a.pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

/// Assert both images have the same shape
pub fn assert_same_shape(a: &DepthImage, b: &DepthImage) {
    assert_eq!(
        (a.width(), a.height()),
        (b.width(), b.height()),
        "Image dimensions differ"
    );
}

/// Assert every pixel of `actual` is within `tolerance` of `expected`
pub fn assert_depth_close(expected: &DepthImage, actual: &DepthImage, tolerance: u16) {
    assert_same_shape(expected, actual);
    let offender = expected
        .pixels()
        .iter()
        .zip(actual.pixels())
        .enumerate()
        .find(|(_, (&x, &y))| x.abs_diff(y) > tolerance);

    if let Some((i, (x, y))) = offender {
        panic!(
            "Pixel ({}, {}) decoded to {} instead of {} (tolerance {}, max error {})",
            i % expected.width(),
            i / expected.width(),
            y,
            x,
            tolerance,
            max_abs_error(expected, actual)
        );
    }
}

/// Assert the round trip reproduced the frame exactly
pub fn assert_lossless(expected: &DepthImage, actual: &DepthImage) {
    assert_same_shape(expected, actual);
    assert_eq!(
        max_abs_error(expected, actual),
        0,
        "Expected a lossless round trip"
    );
}
