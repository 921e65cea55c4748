//! Region-fill filter
//!
//! Flattens areas of similar color. Starting from each pixel not yet
//! covered, a flood fill grows through 8-connected neighbors whose color
//! differs from the region's *running* average by at most the tolerance.
//! The average is updated as the region grows, so a region can follow a
//! slow gradient. Every pixel of the finished region is written with the
//! region's final average.
//!
//! Regions never cross partition boundaries: the fill is limited to the
//! columns of the band being written.

use crate::band::Band;
use crate::error::FilterResult;
use crate::job::DEFAULT_THREADS;
use crate::transform::{ParallelTransform, PixelVisitor};
use std::collections::{HashSet, VecDeque};
use tessera_core::{Canvas, ChannelSums, Coord};

/// Options for the region-fill filter
#[derive(Debug, Clone)]
pub struct RegionFillOptions {
    /// Largest `difference` to the running average a pixel may have
    pub tolerance: u32,
    /// Number of partitions
    pub threads: usize,
}

impl Default for RegionFillOptions {
    fn default() -> Self {
        Self {
            tolerance: 16,
            threads: DEFAULT_THREADS,
        }
    }
}

impl RegionFillOptions {
    /// Set the color tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the number of partitions
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// Per-pixel region-fill visitor
#[derive(Debug, Clone)]
pub struct RegionFillFilter {
    tolerance: u32,
}

/// Reusable buffers for one partition's fills
#[derive(Debug, Default)]
pub struct FillScratch {
    region: Vec<Coord>,
    members: HashSet<Coord>,
    queue: VecDeque<Coord>,
}

impl RegionFillFilter {
    /// Create the visitor from options
    pub fn new(options: &RegionFillOptions) -> Self {
        Self {
            tolerance: options.tolerance,
        }
    }

    /// Build a parallel transform of `canvas` (not yet started)
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameters` error for a zero thread count.
    pub fn transform(
        canvas: &Canvas,
        options: &RegionFillOptions,
    ) -> FilterResult<ParallelTransform<RegionFillFilter>> {
        ParallelTransform::with_threads(canvas, Self::new(options), options.threads)
    }
}

impl PixelVisitor for RegionFillFilter {
    type Scratch = FillScratch;

    fn visit(
        &self,
        source: &Canvas,
        x: i32,
        y: i32,
        band: &mut Band,
        scratch: &mut FillScratch,
    ) -> FilterResult<()> {
        if band.is_set(x, y)? {
            return Ok(());
        }

        let seed = Coord::new(x, y);
        scratch.region.clear();
        scratch.members.clear();
        scratch.queue.clear();

        let mut sums = ChannelSums::default();
        sums.push(&source.get_coord(seed)?);
        let mut average = sums.mean();
        scratch.region.push(seed);
        scratch.members.insert(seed);
        scratch.queue.push_back(seed);

        while let Some(c) = scratch.queue.pop_front() {
            for n in c.neighbors8() {
                if !band.contains_coord(n) || scratch.members.contains(&n) {
                    continue;
                }
                if band.is_set(n.x, n.y)? {
                    continue;
                }
                let p = source.get_coord(n)?;
                if p.difference(&average) > self.tolerance {
                    continue;
                }
                sums.push(&p);
                average = sums.mean();
                scratch.members.insert(n);
                scratch.region.push(n);
                scratch.queue.push_back(n);
            }
        }

        for c in &scratch.region {
            band.set(c.x, c.y, average)?;
        }
        Ok(())
    }
}

/// Region-fill `canvas`, blocking until done
///
/// # Errors
///
/// Returns an error for invalid options or if any partition fails.
pub fn region_fill_filter(canvas: &Canvas, options: &RegionFillOptions) -> FilterResult<Canvas> {
    RegionFillFilter::transform(canvas, options)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Pixel;

    #[test]
    fn test_uniform_canvas_unchanged() {
        let c = Canvas::filled(6, 4, Pixel::rgb(30, 60, 90)).unwrap();
        let out = region_fill_filter(&c, &RegionFillOptions::default()).unwrap();
        assert!(out.equals(&c));
    }

    #[test]
    fn test_two_flat_halves() {
        let pixels = (0..4)
            .flat_map(|_| (0..8).map(|x| if x < 4 { Pixel::gray(10) } else { Pixel::gray(200) }))
            .collect();
        let c = Canvas::from_pixels(8, 4, pixels).unwrap();
        let opts = RegionFillOptions::default().with_threads(1);
        let out = region_fill_filter(&c, &opts).unwrap();
        assert!(out.equals(&c));
    }

    #[test]
    fn test_running_average_drifts() {
        // 18 is too far from the seed but close enough to the running mean
        let pixels = [0u8, 10, 10, 10, 10, 18].map(Pixel::gray).to_vec();
        let c = Canvas::from_pixels(6, 1, pixels).unwrap();
        let opts = RegionFillOptions::default().with_tolerance(10).with_threads(1);
        let out = region_fill_filter(&c, &opts).unwrap();
        // 58 / 6
        assert!((0..6).all(|x| out.get(x, 0).unwrap() == Pixel::gray(9)));
    }
}
