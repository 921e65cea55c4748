//! Canvas statistics
//!
//! Aggregates over coordinate sets, random sampling and local-contrast
//! estimates.

use super::Canvas;
use crate::coord::{Coord, NEIGHBOR_OFFSETS_8};
use crate::error::{Error, Result};
use crate::pixel::{ChannelSums, Pixel};
use rand::Rng;

/// Neighbor choice for Monte Carlo delta sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOffset {
    /// One of the 8 neighbors at distance 1
    #[default]
    Adjacent,
    /// One of the 8 compass directions at distance 2
    Wide,
}

impl NeighborOffset {
    fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> (i32, i32) {
        let (dx, dy) = NEIGHBOR_OFFSETS_8[rng.random_range(0..NEIGHBOR_OFFSETS_8.len())];
        match self {
            NeighborOffset::Adjacent => (dx, dy),
            NeighborOffset::Wide => (dx * 2, dy * 2),
        }
    }
}

impl Canvas {
    /// Channel-wise mean over `coords`, skipping out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if no coordinate lies on the canvas.
    pub fn get_average<'a>(&self, coords: impl IntoIterator<Item = &'a Coord>) -> Result<Pixel> {
        let mut sums = ChannelSums::default();
        for c in coords {
            if let Ok(p) = self.get_coord(*c) {
                sums.push(&p);
            }
        }
        if sums.count() == 0 {
            return Err(Error::EmptyInput("no coordinates on canvas"));
        }
        Ok(sums.mean())
    }

    /// Median-luminance pixel over `coords`, skipping out-of-range coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] if no coordinate lies on the canvas.
    pub fn get_median_by_luminance<'a>(
        &self,
        coords: impl IntoIterator<Item = &'a Coord>,
    ) -> Result<Pixel> {
        let pixels: Vec<Pixel> = coords
            .into_iter()
            .filter_map(|c| self.get_coord(*c).ok())
            .collect();
        if pixels.is_empty() {
            return Err(Error::EmptyInput("no coordinates on canvas"));
        }
        Pixel::median_by_luminance(&pixels)
    }

    /// A uniformly random coordinate on the canvas.
    pub fn random_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        Coord::new(
            rng.random_range(0..self.width()) as i32,
            rng.random_range(0..self.height()) as i32,
        )
    }

    /// The pixel at a uniformly random coordinate.
    pub fn random_pixel<R: Rng + ?Sized>(&self, rng: &mut R) -> Pixel {
        let c = self.random_coord(rng);
        self.get_coord(c).unwrap_or(Pixel::TRANSPARENT)
    }

    /// Monte Carlo local-contrast estimate over the whole canvas.
    ///
    /// Draws `samples` random coordinates, pairs each with a random
    /// neighbor chosen by `offset`, and averages the channel-wise absolute
    /// difference over the pairs whose neighbor is on the canvas. Returns
    /// transparent black if no pair qualified.
    pub fn get_average_delta<R: Rng + ?Sized>(
        &self,
        samples: u32,
        offset: NeighborOffset,
        rng: &mut R,
    ) -> Pixel {
        let mut sums = ChannelSums::default();
        for _ in 0..samples {
            let c = self.random_coord(rng);
            self.accumulate_delta(c, offset, rng, &mut sums);
        }
        sums.mean()
    }

    /// [`Canvas::get_average_delta`] restricted to origins drawn from `coords`.
    ///
    /// Origins outside the canvas are drawn but contribute nothing.
    pub fn get_average_delta_in<R: Rng + ?Sized>(
        &self,
        coords: &[Coord],
        samples: u32,
        offset: NeighborOffset,
        rng: &mut R,
    ) -> Pixel {
        let mut sums = ChannelSums::default();
        if coords.is_empty() {
            return sums.mean();
        }
        for _ in 0..samples {
            let c = coords[rng.random_range(0..coords.len())];
            self.accumulate_delta(c, offset, rng, &mut sums);
        }
        sums.mean()
    }

    fn accumulate_delta<R: Rng + ?Sized>(
        &self,
        origin: Coord,
        offset: NeighborOffset,
        rng: &mut R,
        sums: &mut ChannelSums,
    ) {
        let (dx, dy) = offset.pick(rng);
        if let (Ok(a), Ok(b)) = (self.get_coord(origin), self.get_coord(origin.offset(dx, dy))) {
            sums.push(&a.delta(&b));
        }
    }

    /// Mean color difference between `(x, y)` and its on-canvas 8-neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(x, y)` is off the canvas.
    pub fn local_contrast(&self, x: i32, y: i32) -> Result<u32> {
        let center = self.get(x, y)?;
        let (total, count) = Coord::new(x, y)
            .neighbors8()
            .filter_map(|n| self.get_coord(n).ok())
            .fold((0u32, 0u32), |(t, n), p| (t + center.difference(&p), n + 1));
        Ok(if count == 0 { 0 } else { total / count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn stripes() -> Canvas {
        // Alternating black/white columns
        let pixels = (0..36)
            .map(|i| if i % 2 == 0 { Pixel::gray(0) } else { Pixel::gray(255) })
            .collect();
        Canvas::from_pixels(6, 6, pixels).unwrap()
    }

    #[test]
    fn test_average_skips_out_of_range() {
        let c = Canvas::filled(3, 3, Pixel::gray(40)).unwrap();
        let coords = [Coord::new(0, 0), Coord::new(-1, 0), Coord::new(9, 9)];
        assert_eq!(c.get_average(&coords).unwrap(), Pixel::gray(40));
        assert!(matches!(
            c.get_average(&[Coord::new(-1, -1)]),
            Err(Error::EmptyInput(_))
        ));
        assert!(c.get_median_by_luminance(&[]).is_err());
    }

    #[test]
    fn test_flat_canvas_has_no_delta() {
        let c = Canvas::filled(8, 8, Pixel::gray(90)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let d = c.get_average_delta(200, NeighborOffset::Adjacent, &mut rng);
        assert_eq!(d.channel_sum(), 0);
    }

    #[test]
    fn test_wide_offset_on_stripes() {
        // Distance-2 neighbors on 1-pixel stripes always share a color
        // horizontally; only vertical and diagonal pairs exist too, all same.
        let c = stripes();
        let mut rng = StdRng::seed_from_u64(3);
        let wide = c.get_average_delta(300, NeighborOffset::Wide, &mut rng);
        assert_eq!(wide.channel_sum(), 0);
        let adjacent = c.get_average_delta(300, NeighborOffset::Adjacent, &mut rng);
        assert!(adjacent.channel_sum() > 0);
    }

    #[test]
    fn test_delta_is_deterministic_for_seed() {
        let c = stripes();
        let a = c.get_average_delta(50, NeighborOffset::Adjacent, &mut StdRng::seed_from_u64(7));
        let b = c.get_average_delta(50, NeighborOffset::Adjacent, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_local_contrast() {
        let c = stripes();
        // (0,0): neighbors (1,0) white, (0,1) black, (1,1) white
        assert_eq!(c.local_contrast(0, 0).unwrap(), 170);
        assert!(c.local_contrast(6, 0).is_err());
    }
}
