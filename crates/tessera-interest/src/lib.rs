//! tessera-interest - Interest-window search for Tessera
//!
//! This crate finds the most "interesting" rectangle of a canvas, the
//! window a thumbnail should be cropped to.
//!
//! - **Areas** - Sharpness, contrast and midtone scores of circular samples
//! - **Histograms** - 256-bucket luminance histograms
//! - **Search** - Best mean-score sub-grid via a summed-area table
//!
//! Scoring runs on the partition framework of `tessera-filter`, one task
//! per group of grid columns. Each area draws its Monte Carlo samples from
//! its own seeded generator, so results do not depend on the thread count.
//!
//! # Example
//!
//! ```
//! use tessera_core::{Canvas, Pixel};
//! use tessera_interest::{ThumbnailFinder, ThumbnailOptions};
//!
//! let canvas = Canvas::filled(32, 32, Pixel::gray(90)).unwrap();
//! let finder = ThumbnailFinder::new(
//!     ThumbnailOptions::default()
//!         .with_sections(4, 4)
//!         .with_min_cells(2, 2)
//!         .with_max_cells(2, 2),
//! );
//! let window = finder.find(&canvas).unwrap();
//! assert!(window.x_min >= 0 && window.x_max < 32);
//! assert!(window.width() <= 32 && window.height() <= 32);
//! ```

pub mod area;
pub mod error;
pub mod finder;
pub mod histogram;
pub mod integral;

pub use area::{InterestArea, InterestGrid};
pub use error::{InterestError, InterestResult};
pub use finder::{ScoringJob, ThumbnailFinder, ThumbnailOptions};
pub use histogram::{BUCKETS, LuminanceHistogram};
pub use integral::SummedAreaTable;
