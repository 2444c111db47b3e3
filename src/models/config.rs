use crate::error::ConfigError;
use hue_codec::{ChannelOrder, DepthRange, ScaleMode, CM_SCALE, MM_SCALE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Parameters of one hue codec instance.
///
/// Encoder and decoder must agree on every field, so this is usually kept in
/// a config file next to the encoded frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Nearest depth of interest in metres
    pub depth_min_m: f64,

    /// Farthest depth of interest in metres
    pub depth_max_m: f64,

    /// Metres per raw sensor unit
    #[serde(default = "default_depth_scale")]
    pub depth_scale: f64,

    /// Quantize in disparity (1/depth) space instead of linearly
    #[serde(default, alias = "inverse")]
    pub inverse_colorization: bool,

    /// Byte layout of encoded color images
    #[serde(default)]
    pub channel_order: ChannelOrder,
}

fn default_depth_scale() -> f64 {
    MM_SCALE
}

impl CodecConfig {
    pub fn new(depth_min_m: f64, depth_max_m: f64, depth_scale: f64, inverse: bool) -> Self {
        Self {
            depth_min_m,
            depth_max_m,
            depth_scale,
            inverse_colorization: inverse,
            channel_order: ChannelOrder::default(),
        }
    }

    /// Linear config for sensors reporting millimetres.
    pub fn millimetres(depth_min_m: f64, depth_max_m: f64) -> Self {
        Self::new(depth_min_m, depth_max_m, MM_SCALE, false)
    }

    /// Linear config for sensors reporting centimetres.
    pub fn centimetres(depth_min_m: f64, depth_max_m: f64) -> Self {
        Self::new(depth_min_m, depth_max_m, CM_SCALE, false)
    }

    pub fn with_inverse(mut self, inverse: bool) -> Self {
        self.inverse_colorization = inverse;
        self
    }

    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    pub fn mode(&self) -> ScaleMode {
        if self.inverse_colorization {
            ScaleMode::Inverse
        } else {
            ScaleMode::Linear
        }
    }

    /// Range parameters for [`hue_codec::RangeScaler`].
    pub fn depth_range(&self) -> DepthRange {
        DepthRange::new(
            self.depth_min_m,
            self.depth_max_m,
            self.depth_scale,
            self.mode(),
        )
    }

    /// Parse a single codec config from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::millimetres(0.3, 10.0)
    }
}

/// A config file holding named codec profiles, e.g. one per sensor.
///
/// ```yaml
/// default_profile: room
/// profiles:
///   room:
///     depth_min_m: 0.3
///     depth_max_m: 10.0
///   tabletop:
///     depth_min_m: 0.2
///     depth_max_m: 1.5
///     inverse_colorization: true
///     channel_order: bgr
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecFile {
    #[serde(default)]
    pub profiles: HashMap<String, CodecConfig>,

    /// Profile used when none is named
    #[serde(default = "default_profile")]
    pub default_profile: Option<String>,
}

fn default_profile() -> Option<String> {
    Some("default".to_string())
}

impl CodecFile {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a profile file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            profiles = file.profiles.len(),
            "Loaded codec profiles"
        );
        Ok(file)
    }

    /// Load a profile file, falling back to the built-in defaults when it
    /// is missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(%e, "Failed to load codec profiles, using defaults");
                Self::default()
            }
        }
    }

    pub fn profile(&self, name: &str) -> Result<&CodecConfig, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    /// The profile named by `default_profile`.
    pub fn default_config(&self) -> Result<&CodecConfig, ConfigError> {
        let name = self
            .default_profile
            .as_deref()
            .ok_or(ConfigError::NoDefaultProfile)?;
        self.profile(name)
    }
}

impl Default for CodecFile {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert("default".to_string(), CodecConfig::default());

        Self {
            profiles,
            default_profile: default_profile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.depth_min_m, 0.3);
        assert_eq!(config.depth_max_m, 10.0);
        assert_eq!(config.depth_scale, MM_SCALE);
        assert!(!config.inverse_colorization);
        assert_eq!(config.channel_order, ChannelOrder::Rgb);
        assert_eq!(config.mode(), ScaleMode::Linear);
    }

    #[test]
    fn test_presets() {
        assert_eq!(CodecConfig::centimetres(0.5, 8.0).depth_scale, CM_SCALE);
        let config = CodecConfig::millimetres(0.5, 8.0).with_inverse(true);
        assert_eq!(config.mode(), ScaleMode::Inverse);
        assert_eq!(config.depth_range().mode, ScaleMode::Inverse);
    }

    #[test]
    fn test_parse_minimal_yaml_applies_defaults() {
        let config = CodecConfig::from_yaml_str("depth_min_m: 0.2\ndepth_max_m: 4.0\n").unwrap();
        assert_eq!(config, CodecConfig::millimetres(0.2, 4.0));
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
depth_min_m: 0.0
depth_max_m: 1.531
depth_scale: 0.001
inverse: true
channel_order: bgr
"#;
        let config = CodecConfig::from_yaml_str(yaml).unwrap();
        assert!(config.inverse_colorization);
        assert_eq!(config.channel_order, ChannelOrder::Bgr);
        assert_eq!(config.depth_max_m, 1.531);
    }

    #[test]
    fn test_parse_rejects_unknown_fields() {
        let yaml = "depth_min_m: 0.2\ndepth_max_m: 4.0\ndepth_units: mm\n";
        assert!(matches!(
            CodecConfig::from_yaml_str(yaml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CodecConfig::centimetres(1.0, 20.0)
            .with_inverse(true)
            .with_channel_order(ChannelOrder::Bgr);
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(CodecConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_default_file_has_default_profile() {
        let file = CodecFile::default();
        assert_eq!(file.default_config().unwrap(), &CodecConfig::default());
    }

    #[test]
    fn test_profiles() {
        let yaml = r#"
default_profile: room
profiles:
  room:
    depth_min_m: 0.3
    depth_max_m: 10.0
  tabletop:
    depth_min_m: 0.2
    depth_max_m: 1.5
    inverse_colorization: true
"#;
        let file = CodecFile::from_yaml_str(yaml).unwrap();
        assert_eq!(file.profiles.len(), 2);
        assert_eq!(file.default_config().unwrap().depth_max_m, 10.0);
        assert!(file.profile("tabletop").unwrap().inverse_colorization);
        assert!(matches!(
            file.profile("kinect"),
            Err(ConfigError::UnknownProfile(name)) if name == "kinect"
        ));
    }

    #[test]
    fn test_missing_default_profile() {
        let file = CodecFile::from_yaml_str("default_profile: null\nprofiles: {}\n").unwrap();
        assert!(matches!(
            file.default_config(),
            Err(ConfigError::NoDefaultProfile)
        ));
    }
}
