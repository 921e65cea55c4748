//! tessera-test - Regression test framework for Tessera
//!
//! This crate provides a small regression test harness and a set of
//! synthetic test canvases shared by the per-crate `tests/*_reg.rs` files.
//!
//! # Usage
//!
//! ```
//! use tessera_test::{RegParams, solid_canvas};
//! use tessera_core::Pixel;
//!
//! let canvas = solid_canvas("red", 6, 6, Pixel::rgb(255, 0, 0)).unwrap();
//! let mut rp = RegParams::new("usage");
//! rp.compare_values(36.0, canvas.area() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to report failures without failing

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    checkerboard_canvas, horizontal_gradient, noise_canvas, solid_canvas, stripe_canvas,
};
pub use params::{RegParams, RegTestMode};
