//! tessera-transform - Geometric and compositing operations for Tessera
//!
//! Every operation is a pure function from canvases to a new canvas and
//! relies only on the public [`Canvas`](tessera_core::Canvas) contract:
//!
//! - Orthogonal rotations (90, 180, 270 degrees)
//! - Horizontal and vertical mirrors
//! - Seam-blended horizontal and vertical joins
//! - Nearest-neighbor scaling and resize-to-fill
//! - Procedural mottled textures
//!
//! # Example
//!
//! ```
//! use tessera_core::{Canvas, Pixel};
//! use tessera_transform::{join_horizontal, rotate_90};
//!
//! let left = Canvas::filled(3, 2, Pixel::gray(0)).unwrap();
//! let right = Canvas::filled(3, 2, Pixel::gray(200)).unwrap();
//! let joined = join_horizontal(&left, &right, 1).unwrap();
//! assert_eq!(joined.dimensions(), (5, 2));
//! assert_eq!(rotate_90(&joined, true).unwrap().dimensions(), (2, 5));
//! ```

mod error;
pub mod join;
pub mod rotate;
pub mod scale;
pub mod texture;

pub use error::{TransformError, TransformResult};
pub use join::{join_horizontal, join_vertical};
pub use rotate::{
    mirror_horizontal, mirror_vertical, rotate_90, rotate_180, rotate_270, rotate_orth,
};
pub use scale::{resize_to_fill, scale};
pub use texture::{TextureOptions, mottled_texture};
