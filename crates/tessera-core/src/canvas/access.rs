//! Pixel access functions
//!
//! Checked get/set for single pixels and coordinate sets, canvas-to-canvas
//! blending and clipping.

use super::{Canvas, CanvasMut};
use crate::coord::{Bounds, Coord};
use crate::error::{Error, Result};
use crate::pixel::Pixel;

#[inline]
fn slot_index(width: u32, height: u32, x: i32, y: i32) -> Result<usize> {
    if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
        return Err(Error::OutOfRange {
            x,
            y,
            width,
            height,
        });
    }
    Ok(y as usize * width as usize + x as usize)
}

impl Canvas {
    /// Check whether `(x, y)` lies inside the canvas.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    /// Check whether a coordinate lies inside the canvas.
    #[inline]
    pub fn contains_coord(&self, c: Coord) -> bool {
        self.contains(c.x, c.y)
    }

    /// Get the pixel at `(x, y)`; empty slots read as transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Result<Pixel> {
        let idx = slot_index(self.width(), self.height(), x, y)?;
        Ok(self.slots()[idx].unwrap_or(Pixel::TRANSPARENT))
    }

    /// [`Canvas::get`] by coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    #[inline]
    pub fn get_coord(&self, c: Coord) -> Result<Pixel> {
        self.get(c.x, c.y)
    }

    /// Get the pixel at `(x, y)`, `None` if out of range.
    #[inline]
    pub fn try_get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.get(x, y).ok()
    }

    /// Check whether the slot at `(x, y)` holds a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    pub fn is_set(&self, x: i32, y: i32) -> Result<bool> {
        let idx = slot_index(self.width(), self.height(), x, y)?;
        Ok(self.slots()[idx].is_some())
    }

    /// Return a new canvas with `other` blended into this one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless both canvases have the
    /// same size.
    pub fn blended(&self, other: &Canvas) -> Result<Canvas> {
        let mut out = self.to_mut();
        out.blend(other)?;
        Ok(out.into())
    }

    /// Copy the pixels inside `bounds` (clamped to the canvas) into a new canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `bounds` misses the canvas.
    pub fn clip(&self, bounds: &Bounds) -> Result<Canvas> {
        let b = bounds
            .clamp_to(self.width(), self.height())
            .ok_or_else(|| Error::InvalidParameter(format!("{bounds:?} outside canvas")))?;
        let (w, h) = (b.width(), b.height());
        let mut slots = Vec::with_capacity(w as usize * h as usize);
        for y in b.y_min..=b.y_max {
            let row = y as usize * self.width() as usize;
            for x in b.x_min..=b.x_max {
                slots.push(self.slots()[row + x as usize]);
            }
        }
        Ok(Canvas::from_slots(w, h, slots))
    }
}

impl CanvasMut {
    /// Get the pixel at `(x, y)`; empty slots read as transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Result<Pixel> {
        let idx = slot_index(self.width(), self.height(), x, y)?;
        Ok(self.slots()[idx].unwrap_or(Pixel::TRANSPARENT))
    }

    /// Store a pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> Result<()> {
        let idx = slot_index(self.width(), self.height(), x, y)?;
        self.slots_mut()[idx] = Some(pixel);
        Ok(())
    }

    /// [`CanvasMut::set`] by coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    #[inline]
    pub fn set_coord(&mut self, c: Coord, pixel: Pixel) -> Result<()> {
        self.set(c.x, c.y, pixel)
    }

    /// Store `pixel` at every coordinate.
    ///
    /// All coordinates are validated first; on error nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] for the first coordinate outside the canvas.
    pub fn set_many<'a>(
        &mut self,
        coords: impl IntoIterator<Item = &'a Coord>,
        pixel: Pixel,
    ) -> Result<()> {
        let (w, h) = self.dimensions();
        let indices = coords
            .into_iter()
            .map(|c| slot_index(w, h, c.x, c.y))
            .collect::<Result<Vec<_>>>()?;
        let slots = self.slots_mut();
        for idx in indices {
            slots[idx] = Some(pixel);
        }
        Ok(())
    }

    /// Empty the slot at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] outside the canvas.
    pub fn clear(&mut self, x: i32, y: i32) -> Result<()> {
        let idx = slot_index(self.width(), self.height(), x, y)?;
        self.slots_mut()[idx] = None;
        Ok(())
    }

    /// Blend every pixel of `other` into this canvas.
    ///
    /// The weight is the other pixel's opacity; this canvas's opacity is
    /// left untouched. Empty slots here blend as transparent black and
    /// become set; empty slots in `other` contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless both canvases have the
    /// same size.
    pub fn blend(&mut self, other: &Canvas) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        for (dst, src) in self.slots_mut().iter_mut().zip(other.slots()) {
            if let Some(src) = src {
                let mut p = dst.unwrap_or(Pixel::TRANSPARENT);
                p.blend(src);
                *dst = Some(p);
            }
        }
        Ok(())
    }
}
