//! Tessera Core - Basic data structures for raster processing
//!
//! This crate provides the fundamental data structures used throughout
//! the Tessera engine:
//!
//! - [`Channel`] - A 0–255 fixed-point channel value
//! - [`Pixel`] - An ARGB pixel with opacity-weighted blending
//! - [`Canvas`] / [`CanvasMut`] - The pixel grid (immutable / mutable)
//! - [`Coord`] / [`Bounds`] - Coordinates and inclusive pixel boxes
//!
//! # Example
//!
//! ```
//! use tessera_core::{Canvas, Pixel};
//!
//! let base = Canvas::filled(4, 4, Pixel::rgb(10, 10, 10)).unwrap();
//! let overlay = Canvas::filled(4, 4, Pixel::argb(128, 210, 210, 210)).unwrap();
//! let out = base.blended(&overlay).unwrap();
//! assert_eq!(out.get(0, 0).unwrap(), Pixel::rgb(110, 110, 110));
//! ```

pub mod canvas;
pub mod channel;
pub mod coord;
pub mod error;
pub mod pixel;

pub use canvas::{Canvas, CanvasMut, NeighborOffset};
pub use channel::Channel;
pub use coord::{Bounds, Coord, NEIGHBOR_OFFSETS_8};
pub use error::{Error, Result};
pub use pixel::{ByLuminance, ChannelSums, Pixel};
