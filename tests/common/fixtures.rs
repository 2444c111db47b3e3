//! Test fixtures and constants.

use depth_hue::{CodecConfig, ColorImage, DepthImage};

/// Codec configs for different scenarios
pub mod configs {
    use depth_hue::CodecConfig;

    /// One raw unit per level, so every level in 0..=1530 survives exactly
    pub fn identity() -> CodecConfig {
        CodecConfig::new(0.0, 1530.0, 1.0, false)
    }

    /// Indoor room sensor in millimetres
    pub fn room() -> CodecConfig {
        CodecConfig::millimetres(2.2, 7.2)
    }

    /// Short-range sensor using disparity spacing
    pub fn tabletop() -> CodecConfig {
        CodecConfig::millimetres(0.3, 1.5).with_inverse(true)
    }
}

/// Profile file exercising every config field
pub const PROFILES_YAML: &str = r#"
default_profile: room
profiles:
  room:
    depth_min_m: 2.2
    depth_max_m: 7.2
  tabletop:
    depth_min_m: 0.3
    depth_max_m: 1.5
    inverse_colorization: true
    channel_order: bgr
  survey:
    depth_min_m: 1.0
    depth_max_m: 200.0
    depth_scale: 0.01
"#;

/// A 64x48 frame resembling a real sensor capture in millimetres: a wall
/// sloping away from 3.0 m to 6.0 m, a box at 2.5 m in the middle and a
/// strip of missing readings along the left edge.
pub fn sensor_frame() -> DepthImage {
    let (width, height) = (64, 48);
    let mut frame = DepthImage::new(width, height);
    for (i, px) in frame.pixels_mut().iter_mut().enumerate() {
        let (x, y) = (i % width, i / width);
        *px = if x < 4 {
            0
        } else if (20..44).contains(&x) && (12..36).contains(&y) {
            2500
        } else {
            3000 + (x * 3000 / (width - 1)) as u16
        };
    }
    frame
}

/// Deterministic per-channel disturbance in `-amplitude..=amplitude`, the
/// kind of small error a lossy codec leaves behind.
pub fn perturb(color: &ColorImage, amplitude: i16) -> ColorImage {
    let span = (2 * amplitude + 1) as usize;
    let mut out = color.clone();
    for (i, byte) in out.as_bytes_mut().iter_mut().enumerate() {
        let delta = ((i * 7) % span) as i16 - amplitude;
        *byte = (*byte as i16 + delta).clamp(0, 255) as u8;
    }
    out
}

/// Configs that have no valid codec
pub fn broken_configs() -> Vec<CodecConfig> {
    vec![
        CodecConfig::millimetres(2.0, 1.0),
        CodecConfig::millimetres(1.0, 1.0),
        CodecConfig::millimetres(-0.5, 1.0),
        CodecConfig::new(0.5, 4.0, 0.0, false),
        CodecConfig::new(0.5, f64::NAN, 0.001, true),
    ]
}
