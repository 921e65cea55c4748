//! Canvas - The main pixel grid
//!
//! A [`Canvas`] is a fixed-size W×H grid of optional pixel slots. Empty
//! slots read as [`Pixel::TRANSPARENT`], never as an error.
//!
//! # Ownership model
//!
//! `Canvas` uses `Arc` for cheap cloning and can be handed to worker
//! threads as-is. To modify pixels, convert to [`CanvasMut`] via
//! [`Canvas::try_into_mut`] or [`Canvas::to_mut`], then convert back with
//! `Into<Canvas>`.
//!
//! # Bounds policy
//!
//! Every read and write path is checked: coordinates outside
//! `[0, W) × [0, H)` produce [`Error::OutOfRange`]. Bulk writes validate all
//! coordinates before touching any slot.

mod access;
pub mod serial;
mod stats;

pub use stats::NeighborOffset;

use crate::error::{Error, Result};
use crate::pixel::Pixel;
use std::sync::Arc;

/// Internal canvas data
#[derive(Debug, Clone, PartialEq, Eq)]
struct CanvasData {
    width: u32,
    height: u32,
    /// Row-major slots
    slots: Vec<Option<Pixel>>,
}

/// Canvas - immutable, shareable pixel grid
///
/// # Examples
///
/// ```
/// use tessera_core::{Canvas, Pixel};
///
/// let canvas = Canvas::new(4, 3).unwrap();
/// assert_eq!(canvas.width(), 4);
/// assert_eq!(canvas.get(3, 2).unwrap(), Pixel::TRANSPARENT);
/// assert!(canvas.get(4, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    inner: Arc<CanvasData>,
}

impl Canvas {
    /// Create a blank canvas (all slots empty).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(Canvas {
            inner: Arc::new(CanvasData {
                width,
                height,
                slots: vec![None; len],
            }),
        })
    }

    /// Create a canvas with every slot set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let len = width as usize * height as usize;
        Ok(Canvas {
            inner: Arc::new(CanvasData {
                width,
                height,
                slots: vec![Some(pixel); len],
            }),
        })
    }

    /// Create a canvas from row-major pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero side and
    /// [`Error::InvalidParameter`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
        Self::check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self::from_slots(
            width,
            height,
            pixels.into_iter().map(Some).collect(),
        ))
    }

    /// Assemble from raw slots; length must already match.
    pub(crate) fn from_slots(width: u32, height: u32, slots: Vec<Option<Pixel>>) -> Self {
        debug_assert_eq!(slots.len(), width as usize * height as usize);
        Canvas {
            inner: Arc::new(CanvasData {
                width,
                height,
                slots,
            }),
        }
    }

    fn check_dimensions(width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(())
    }

    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Number of pixel slots.
    #[inline]
    pub fn area(&self) -> usize {
        self.inner.slots.len()
    }

    /// Check whether two canvases have the same width and height.
    pub fn sizes_equal(&self, other: &Canvas) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Require identical dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] otherwise.
    pub fn check_same_size(&self, other: &Canvas) -> Result<()> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }

    /// Check pixel-for-pixel equality, treating empty slots as transparent.
    pub fn equals(&self, other: &Canvas) -> bool {
        self.sizes_equal(other)
            && self
                .inner
                .slots
                .iter()
                .zip(other.inner.slots.iter())
                .all(|(a, b)| a.unwrap_or(Pixel::TRANSPARENT) == b.unwrap_or(Pixel::TRANSPARENT))
    }

    /// Number of references to the shared pixel data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create an independent copy of the pixel data.
    pub fn deep_clone(&self) -> Self {
        Canvas {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Try to take unique ownership for mutation.
    ///
    /// Returns `Err(self)` if the data is shared.
    pub fn try_into_mut(self) -> std::result::Result<CanvasMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(CanvasMut { inner: data }),
            Err(inner) => Err(Canvas { inner }),
        }
    }

    /// Get a mutable copy (always copies).
    pub fn to_mut(&self) -> CanvasMut {
        CanvasMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Take a mutable canvas, copying only if the data is shared.
    pub fn into_mut(self) -> CanvasMut {
        self.try_into_mut().unwrap_or_else(|shared| shared.to_mut())
    }

    #[inline]
    pub(crate) fn slots(&self) -> &[Option<Pixel>] {
        &self.inner.slots
    }
}

/// Mutable canvas, uniquely owned
#[derive(Debug)]
pub struct CanvasMut {
    inner: CanvasData,
}

impl CanvasMut {
    /// Get the canvas width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the canvas height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Empty every slot.
    pub fn clear_all(&mut self) {
        self.inner.slots.iter_mut().for_each(|s| *s = None);
    }

    /// Set every slot to `pixel`.
    pub fn fill(&mut self, pixel: Pixel) {
        self.inner.slots.iter_mut().for_each(|s| *s = Some(pixel));
    }

    #[inline]
    pub(crate) fn slots(&self) -> &[Option<Pixel>] {
        &self.inner.slots
    }

    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<Pixel>] {
        &mut self.inner.slots
    }
}

impl From<CanvasMut> for Canvas {
    fn from(canvas: CanvasMut) -> Self {
        Canvas {
            inner: Arc::new(canvas.inner),
        }
    }
}
