//! depth-hue - depth maps through color codecs
//!
//! Hue-encodes 16-bit depth images into 3-channel 8-bit color images so they
//! can be stored or streamed with ordinary image and video codecs, and
//! decodes them back. The value-level mapping lives in the `hue_codec`
//! crate; this crate adds image buffers, the whole-frame codec,
//! configuration, fidelity metrics and logging.
//!
//! ```
//! use depth_hue::{CodecConfig, HueCodec, metrics, synthetic};
//!
//! let config = CodecConfig::millimetres(0.5, 4.0);
//! let codec = HueCodec::new(config).unwrap();
//!
//! let depth = synthetic::depth_ramp(64, 48, 600.0, 3900.0);
//! let color = codec.encode(&depth).unwrap();
//! let decoded = codec.decode(&color).unwrap();
//!
//! let db = metrics::psnr(&depth, &decoded, codec.depth_max_m(), codec.depth_scale()).unwrap();
//! assert!(db > 60.0);
//! ```

pub mod codec;
pub mod error;
pub mod metrics;
pub mod models;
pub mod synthetic;
pub mod telemetry;

pub use codec::HueCodec;
pub use error::{ConfigError, HueError, ImageError, MetricError};
pub use models::{CodecConfig, CodecFile, ColorImage, DepthImage};

pub use hue_codec::{ChannelOrder, Level, Rgb, ScaleMode};
