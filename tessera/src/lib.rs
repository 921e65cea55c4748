//! Tessera - Raster image-processing engine
//!
//! Tessera works on in-memory ARGB canvases and offers:
//!
//! - Canvases, pixels with opacity-weighted blending, bounds-checked access
//! - Orthogonal rotation, mirroring, seam-blended joins and scaling
//! - Selections with cached border, neighbors and centroid, region growing
//!   and segmentation
//! - Interest-window search for thumbnail cropping
//! - Parallel per-pixel filters (median, region fill) with a
//!   start/wait protocol
//!
//! # Example
//!
//! ```
//! use tessera::{Canvas, Pixel};
//! use tessera::filter::{MedianFilterOptions, median_filter};
//!
//! let canvas = Canvas::filled(12, 12, Pixel::gray(60)).unwrap();
//! let smoothed = median_filter(&canvas, &MedianFilterOptions::default()).unwrap();
//! assert_eq!(smoothed.get(5, 5).unwrap(), Pixel::gray(60));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use tessera_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tessera_filter as filter;
pub use tessera_interest as interest;
pub use tessera_region as region;
pub use tessera_transform as transform;
