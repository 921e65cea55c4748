//! tessera-region - Selections and region growing for Tessera
//!
//! This crate provides:
//!
//! - **Selections** - Coordinate sets with cached border, neighbors and
//!   centroid
//! - **Region growing** - Threshold flood growth and round one-cell growth
//! - **Segmentation** - Splitting a canvas into disjoint connected selections
//! - **Circle cache** - Shared circle offset lists for circular selections
//!
//! # Examples
//!
//! ## Segmenting a canvas
//!
//! ```
//! use tessera_core::{Canvas, Channel, Pixel};
//! use tessera_region::find_all_selections;
//!
//! let canvas = Canvas::filled(6, 6, Pixel::rgb(255, 0, 0)).unwrap();
//! let selections = find_all_selections(&canvas, Channel::from_percent(100));
//! assert_eq!(selections.len(), 1);
//! assert_eq!(selections[0].len(), 36);
//! assert_eq!(selections[0].interior().count(), 16);
//! ```
//!
//! ## Circular selections
//!
//! ```
//! use tessera_core::Coord;
//! use tessera_region::{CircleCache, Selection};
//!
//! let cache = CircleCache::new();
//! let disc = Selection::circle(Coord::new(10, 10), 2, &cache);
//! assert_eq!(disc.len(), 13);
//! assert_eq!(disc.centroid(), Some(Coord::new(10, 10)));
//! ```

pub mod circle;
pub mod error;
pub mod grow;
pub mod segment;
pub mod selection;

// Re-export core types
pub use tessera_core;

pub use circle::CircleCache;
pub use error::{RegionError, RegionResult};
pub use segment::find_all_selections;
pub use selection::{CoordClass, Selection};
