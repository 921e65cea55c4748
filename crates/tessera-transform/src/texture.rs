//! Procedural mottled textures
//!
//! A texture starts as a solid base color. A number of circular blobs are
//! then stamped at random positions; each blob shifts the color channels by
//! a random amount that fades linearly from full strength at the blob
//! center to nothing at its radius. Overlapping blobs accumulate.

use crate::{TransformError, TransformResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tessera_core::{Canvas, Pixel};

/// Options for [`mottled_texture`]
#[derive(Debug, Clone)]
pub struct TextureOptions {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Color every pixel starts from
    pub base: Pixel,
    /// Largest per-channel shift a blob applies at its center
    pub variance: u8,
    /// Number of blobs to stamp
    pub blob_count: u32,
    /// Blob radius in pixels
    pub blob_radius: u32,
    /// RNG seed; equal seeds give equal textures
    pub seed: u64,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            base: Pixel::rgb(128, 128, 128),
            variance: 24,
            blob_count: 32,
            blob_radius: 8,
            seed: 0,
        }
    }
}

impl TextureOptions {
    /// Set the output size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the base color
    pub fn with_base(mut self, base: Pixel) -> Self {
        self.base = base;
        self
    }

    /// Set the maximum per-channel shift
    pub fn with_variance(mut self, variance: u8) -> Self {
        self.variance = variance;
        self
    }

    /// Set the number and radius of blobs
    pub fn with_blobs(mut self, count: u32, radius: u32) -> Self {
        self.blob_count = count;
        self.blob_radius = radius;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Generate a mottled texture
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] for a zero blob radius
/// and a core error for a zero output dimension.
pub fn mottled_texture(options: &TextureOptions) -> TransformResult<Canvas> {
    if options.blob_radius == 0 {
        return Err(TransformError::InvalidParameters(
            "blob radius must be positive".to_string(),
        ));
    }
    let base = Canvas::filled(options.width, options.height, options.base)?;
    let (w, h) = (options.width as i32, options.height as i32);
    let r = i64::from(options.blob_radius);
    let var = options.variance as i32;
    let r_sq = i128::from(r) * i128::from(r);
    let mut rng = StdRng::seed_from_u64(options.seed);

    // Accumulated shift per pixel and channel, applied once at the end
    let mut shift = vec![[0i32; 3]; w as usize * h as usize];

    for _ in 0..options.blob_count {
        let cx = i64::from(rng.random_range(0..w));
        let cy = i64::from(rng.random_range(0..h));
        let amount = [
            rng.random_range(-var..=var),
            rng.random_range(-var..=var),
            rng.random_range(-var..=var),
        ];

        // radii far beyond the canvas must not overflow
        let (x0, x1) = ((cx - r).max(0), (cx + r).min(i64::from(w) - 1));
        let (y0, y1) = ((cy - r).max(0), (cy + r).min(i64::from(h) - 1));
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d2 = (x - cx) * (x - cx) + (y - cy) * (y - cy);
                if i128::from(d2) >= r_sq {
                    continue;
                }
                let d = (d2 as f64).sqrt();
                let falloff = (r as f64 - d) / r as f64;
                let cell = &mut shift[y as usize * w as usize + x as usize];
                for (acc, a) in cell.iter_mut().zip(amount) {
                    *acc = acc.saturating_add((a as f64 * falloff).round() as i32);
                }
            }
        }
    }

    let mut out = base.into_mut();
    for y in 0..h {
        for x in 0..w {
            let [dr, dg, db] = shift[y as usize * w as usize + x as usize];
            let mut p = out.get(x, y)?;
            p.red.add_assign_saturating(dr);
            p.green.add_assign_saturating(dg);
            p.blue.add_assign_saturating(db);
            out.set(x, y, p)?;
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_texture() {
        let opts = TextureOptions::default().with_size(20, 12).with_seed(7);
        let a = mottled_texture(&opts).unwrap();
        let b = mottled_texture(&opts).unwrap();
        assert!(a.equals(&b));
    }

    #[test]
    fn test_zero_variance_is_solid() {
        let base = Pixel::rgb(40, 80, 120);
        let opts = TextureOptions::default()
            .with_size(10, 10)
            .with_base(base)
            .with_variance(0);
        let t = mottled_texture(&opts).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(t.get(x, y).unwrap(), base);
            }
        }
    }

    #[test]
    fn test_oversized_blob() {
        let opts = TextureOptions::default()
            .with_size(8, 8)
            .with_blobs(1, 50_000)
            .with_seed(3);
        let t = mottled_texture(&opts).unwrap();
        assert_eq!(t.dimensions(), (8, 8));

        let huge = TextureOptions::default().with_size(4, 4).with_blobs(2, u32::MAX);
        assert!(mottled_texture(&huge).is_ok());
    }

    #[test]
    fn test_no_blobs_is_solid() {
        let opts = TextureOptions::default().with_size(5, 5).with_blobs(0, 3);
        let t = mottled_texture(&opts).unwrap();
        assert_eq!(t.get(4, 4).unwrap(), TextureOptions::default().base);
    }

    #[test]
    fn test_invalid_options() {
        let opts = TextureOptions::default().with_blobs(3, 0);
        assert!(matches!(
            mottled_texture(&opts),
            Err(TransformError::InvalidParameters(_))
        ));
        let opts = TextureOptions::default().with_size(0, 4);
        assert!(matches!(mottled_texture(&opts), Err(TransformError::Core(_))));
    }
}
