pub mod config;
pub mod image;

pub use config::{CodecConfig, CodecFile};
pub use image::{ColorImage, DepthImage};
