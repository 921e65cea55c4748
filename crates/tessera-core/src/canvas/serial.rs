//! Flat pixel-array serialization
//!
//! Canvases exchange pixels with decoders and display layers as row-major
//! ARGB buffers, either packed `u32` words (`0xAARRGGBB`) or bytes in
//! `A, R, G, B` order. Empty slots serialize as transparent black.
//!
//! ```text
//! index(x, y) = y * width + x
//! byte layout  = [A0 R0 G0 B0 A1 R1 G1 B1 ...]
//! ```

use super::Canvas;
use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Bytes per serialized pixel.
pub const BYTES_PER_PIXEL: usize = 4;

impl Canvas {
    /// Create a canvas from packed ARGB words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero side and
    /// [`Error::InvalidParameter`] if the buffer length does not match.
    pub fn from_argb(width: u32, height: u32, data: &[u32]) -> Result<Self> {
        Canvas::from_pixels(
            width,
            height,
            data.iter().map(|&w| Pixel::from_argb(w)).collect(),
        )
    }

    /// Create a canvas from ARGB bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero side and
    /// [`Error::InvalidParameter`] if the buffer length does not match.
    pub fn from_argb_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Canvas::from_pixels(
            width,
            height,
            data.chunks_exact(BYTES_PER_PIXEL)
                .map(|b| Pixel::argb(b[0], b[1], b[2], b[3]))
                .collect(),
        )
    }

    /// Serialize to packed ARGB words.
    pub fn to_argb(&self) -> Vec<u32> {
        self.slots()
            .iter()
            .map(|s| s.unwrap_or(Pixel::TRANSPARENT).to_argb())
            .collect()
    }

    /// Serialize to ARGB bytes.
    pub fn to_argb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.area() * BYTES_PER_PIXEL);
        for s in self.slots() {
            out.extend_from_slice(&s.unwrap_or(Pixel::TRANSPARENT).to_argb().to_be_bytes());
        }
        out
    }

    /// Row-major copy of all pixels.
    pub fn to_pixels(&self) -> Vec<Pixel> {
        self.slots()
            .iter()
            .map(|s| s.unwrap_or(Pixel::TRANSPARENT))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_layout() {
        let c = Canvas::from_argb(2, 1, &[0x11223344, 0xff000000]).unwrap();
        assert_eq!(
            c.to_argb_bytes(),
            vec![0x11, 0x22, 0x33, 0x44, 0xff, 0x00, 0x00, 0x00]
        );
        let back = Canvas::from_argb_bytes(2, 1, &c.to_argb_bytes()).unwrap();
        assert!(back.equals(&c));
    }

    #[test]
    fn test_empty_slots_serialize_transparent() {
        let c = Canvas::new(2, 2).unwrap();
        assert_eq!(c.to_argb(), vec![0; 4]);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(Canvas::from_argb_bytes(2, 2, &[0; 15]).is_err());
        assert!(Canvas::from_argb(2, 2, &[0; 5]).is_err());
    }
}
