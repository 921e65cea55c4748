//! Median filter
//!
//! Replaces every pixel with the per-channel median of the `(2r + 1)²`
//! window around it. Window cells off the canvas are skipped, so edge
//! pixels use a smaller window. The median can be blended back onto the
//! source pixel with a given opacity instead of replacing it outright.

use crate::band::Band;
use crate::error::{FilterError, FilterResult};
use crate::job::DEFAULT_THREADS;
use crate::transform::{ParallelTransform, PixelVisitor};
use tessera_core::{Canvas, Channel, Pixel};

/// Options for the median filter
#[derive(Debug, Clone)]
pub struct MedianFilterOptions {
    /// Window radius; the window is `2 * radius + 1` pixels square
    pub radius: u32,
    /// Opacity of the median when blended onto the source pixel
    /// (`Channel::MAX` replaces the color channels)
    pub blend_opacity: Channel,
    /// Number of partitions
    pub threads: usize,
}

impl Default for MedianFilterOptions {
    fn default() -> Self {
        Self {
            radius: 1,
            blend_opacity: Channel::MAX,
            threads: DEFAULT_THREADS,
        }
    }
}

impl MedianFilterOptions {
    /// Set the window radius
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the blend opacity
    pub fn with_blend_opacity(mut self, opacity: Channel) -> Self {
        self.blend_opacity = opacity;
        self
    }

    /// Set the number of partitions
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

/// Per-pixel median visitor
#[derive(Debug, Clone)]
pub struct MedianFilter {
    radius: i32,
    blend_opacity: Channel,
}

impl MedianFilter {
    /// Create the visitor from options
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] for a radius that does
    /// not fit an `i32`.
    pub fn new(options: &MedianFilterOptions) -> FilterResult<Self> {
        let radius = i32::try_from(options.radius).map_err(|_| {
            FilterError::InvalidParameters(format!("radius {} too large", options.radius))
        })?;
        Ok(Self {
            radius,
            blend_opacity: options.blend_opacity,
        })
    }

    /// Build a parallel transform of `canvas` (not yet started)
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] for invalid options.
    pub fn transform(
        canvas: &Canvas,
        options: &MedianFilterOptions,
    ) -> FilterResult<ParallelTransform<MedianFilter>> {
        ParallelTransform::with_threads(canvas, Self::new(options)?, options.threads)
    }
}

impl PixelVisitor for MedianFilter {
    type Scratch = Vec<Pixel>;

    fn visit(
        &self,
        source: &Canvas,
        x: i32,
        y: i32,
        band: &mut Band,
        window: &mut Vec<Pixel>,
    ) -> FilterResult<()> {
        let r = self.radius;
        window.clear();
        for wy in y.saturating_sub(r)..=y.saturating_add(r) {
            for wx in x.saturating_sub(r)..=x.saturating_add(r) {
                if let Some(p) = source.try_get(wx, wy) {
                    window.push(p);
                }
            }
        }
        let median = Pixel::channel_median(window)?;
        let out = source
            .get(x, y)?
            .blended(&median.with_opacity(self.blend_opacity));
        band.set(x, y, out)
    }
}

/// Median-filter `canvas`, blocking until done
///
/// # Errors
///
/// Returns an error for invalid options or if any partition fails.
pub fn median_filter(canvas: &Canvas, options: &MedianFilterOptions) -> FilterResult<Canvas> {
    MedianFilter::transform(canvas, options)?.run()
}
