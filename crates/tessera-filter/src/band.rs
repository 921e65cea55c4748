//! Output bands
//!
//! A [`Band`] is the slice of an output canvas owned by one partition: a
//! contiguous range of columns over the full height. Partitions write only
//! into their own band, so the write path needs no locking. Bands are
//! stitched into a canvas once every partition has finished.

use crate::error::FilterResult;
use std::ops::Range;
use tessera_core::{Canvas, Coord, Error, Pixel};

/// Column slice of an output canvas, initially empty
#[derive(Debug, Clone)]
pub struct Band {
    columns: Range<u32>,
    height: u32,
    slots: Vec<Option<Pixel>>,
}

impl Band {
    /// Create an empty band covering `columns` × `0..height`
    pub fn new(columns: Range<u32>, height: u32) -> Self {
        let len = columns.len() * height as usize;
        Self {
            columns,
            height,
            slots: vec![None; len],
        }
    }

    /// Columns covered by this band
    pub fn columns(&self) -> Range<u32> {
        self.columns.clone()
    }

    /// Band height (the full canvas height)
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether `(x, y)`, in canvas coordinates, lies in this band
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && self.columns.contains(&(x as u32)) && (y as u32) < self.height
    }

    /// [`Band::contains`] by coordinate
    #[inline]
    pub fn contains_coord(&self, c: Coord) -> bool {
        self.contains(c.x, c.y)
    }

    fn index(&self, x: i32, y: i32) -> FilterResult<usize> {
        if !self.contains(x, y) {
            return Err(Error::OutOfRange {
                x,
                y,
                width: self.columns.end,
                height: self.height,
            }
            .into());
        }
        let w = self.columns.len();
        Ok(y as usize * w + (x as u32 - self.columns.start) as usize)
    }

    /// Pixel written at `(x, y)`, `None` if nothing was written yet
    ///
    /// # Errors
    ///
    /// Returns a core `OutOfRange` error outside the band.
    pub fn get(&self, x: i32, y: i32) -> FilterResult<Option<Pixel>> {
        let idx = self.index(x, y)?;
        Ok(self.slots[idx])
    }

    /// Check whether `(x, y)` has been written
    ///
    /// # Errors
    ///
    /// Returns a core `OutOfRange` error outside the band.
    pub fn is_set(&self, x: i32, y: i32) -> FilterResult<bool> {
        Ok(self.get(x, y)?.is_some())
    }

    /// Write a pixel at `(x, y)`, in canvas coordinates
    ///
    /// # Errors
    ///
    /// Returns a core `OutOfRange` error outside the band.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) -> FilterResult<()> {
        let idx = self.index(x, y)?;
        self.slots[idx] = Some(pixel);
        Ok(())
    }
}

/// Assemble bands into a `width` × `height` canvas
///
/// Slots no band wrote stay empty.
///
/// # Errors
///
/// Returns a core error if a band does not fit the canvas.
pub fn stitch(width: u32, height: u32, bands: &[Band]) -> FilterResult<Canvas> {
    let mut out = Canvas::new(width, height)?.into_mut();
    for band in bands {
        let w = band.columns.len();
        for (i, slot) in band.slots.iter().enumerate() {
            if let Some(p) = slot {
                let x = band.columns.start as usize + i % w;
                let y = i / w;
                out.set(x as i32, y as i32, *p)?;
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_bounds() {
        let mut band = Band::new(2..4, 3);
        assert!(band.contains(2, 0));
        assert!(!band.contains(4, 0));
        assert!(!band.contains(1, 2));
        assert!(band.set(4, 0, Pixel::gray(1)).is_err());
        band.set(3, 2, Pixel::gray(1)).unwrap();
        assert_eq!(band.get(3, 2).unwrap(), Some(Pixel::gray(1)));
        assert!(!band.is_set(2, 2).unwrap());
    }

    #[test]
    fn test_stitch() {
        let mut a = Band::new(0..1, 2);
        let mut b = Band::new(1..3, 2);
        a.set(0, 1, Pixel::gray(5)).unwrap();
        b.set(2, 0, Pixel::gray(6)).unwrap();
        let c = stitch(3, 2, &[a, b]).unwrap();
        assert_eq!(c.get(0, 1).unwrap(), Pixel::gray(5));
        assert_eq!(c.get(2, 0).unwrap(), Pixel::gray(6));
        assert!(!c.is_set(1, 1).unwrap());
    }
}
