//! Common test infrastructure for depth-hue integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod assertions;
pub mod container;
pub mod fixtures;

pub use assertions::*;

/// Route codec logs through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = depth_hue::telemetry::try_init();
}
