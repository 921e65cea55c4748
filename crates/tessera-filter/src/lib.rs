//! tessera-filter - Parallel per-pixel filters for Tessera
//!
//! This crate provides the parallel transform framework and the filters
//! built on it:
//!
//! - **Partition jobs** - Split an extent into column ranges, run one task
//!   per range on a rayon pool, track a forward-only status
//! - **Parallel transforms** - Run a [`PixelVisitor`] over every pixel with
//!   each partition writing its own [`Band`] of the output
//! - **Median filter** - Per-channel median over a square window
//! - **Region-fill filter** - Flood fill against a running average color
//!
//! # Protocol
//!
//! A transform is created in [`TransformStatus::Ready`]. `start()` moves it
//! to `Processing` and returns immediately; `wait_until_finished()` blocks
//! until every partition reports, then yields `Success` or an
//! `AggregateFailure` listing every partition's message.
//!
//! # Example
//!
//! ```
//! use tessera_core::{Canvas, Pixel};
//! use tessera_filter::{MedianFilter, MedianFilterOptions, TransformStatus};
//!
//! let canvas = Canvas::filled(16, 16, Pixel::gray(80)).unwrap();
//! let mut t = MedianFilter::transform(&canvas, &MedianFilterOptions::default()).unwrap();
//! t.start().unwrap();
//! t.wait_until_finished(None).unwrap();
//! assert_eq!(t.status(), TransformStatus::Success);
//! assert!(t.output().unwrap().equals(&canvas));
//! ```

pub mod band;
pub mod error;
pub mod job;
pub mod median;
pub mod region_fill;
pub mod status;
pub mod transform;

pub use band::Band;
pub use error::{FilterError, FilterResult};
pub use job::{DEFAULT_THREADS, PartitionJob, partition_ranges};
pub use median::{MedianFilter, MedianFilterOptions, median_filter};
pub use region_fill::{RegionFillFilter, RegionFillOptions, region_fill_filter};
pub use status::TransformStatus;
pub use transform::{ParallelTransform, PixelVisitor};
