//! Parallel per-pixel transforms
//!
//! A [`ParallelTransform`] runs a [`PixelVisitor`] over every pixel of a
//! source canvas. The columns are split into partitions, one task each;
//! every task visits its columns over the full height and writes into its
//! own [`Band`]. The bands are stitched into the output canvas the first
//! time [`ParallelTransform::output`] is called after success.
//!
//! # Usage
//!
//! ```
//! use tessera_core::{Canvas, Pixel};
//! use tessera_filter::{Band, FilterResult, ParallelTransform, PixelVisitor};
//!
//! struct Invert;
//!
//! impl PixelVisitor for Invert {
//!     type Scratch = ();
//!
//!     fn visit(
//!         &self,
//!         source: &Canvas,
//!         x: i32,
//!         y: i32,
//!         band: &mut Band,
//!         _: &mut (),
//!     ) -> FilterResult<()> {
//!         let p = source.get(x, y)?;
//!         let inv = Pixel::rgb(255 - p.red.value(), 255 - p.green.value(), 255 - p.blue.value());
//!         band.set(x, y, inv)
//!     }
//! }
//!
//! let canvas = Canvas::filled(8, 4, Pixel::gray(10)).unwrap();
//! let mut t = ParallelTransform::new(&canvas, Invert).unwrap();
//! t.start().unwrap();
//! t.wait_until_finished(None).unwrap();
//! assert_eq!(t.output().unwrap().get(7, 3).unwrap(), Pixel::gray(245));
//! ```

use crate::band::{Band, stitch};
use crate::error::FilterResult;
use crate::job::{DEFAULT_THREADS, PartitionJob};
use crate::status::TransformStatus;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tessera_core::Canvas;

/// Per-pixel work of a parallel transform
pub trait PixelVisitor: Send + Sync + 'static {
    /// Working state allocated once per partition
    type Scratch: Default;

    /// Visit `(x, y)` of `source`, writing results into `band`
    ///
    /// `band` covers the partition's columns over the full height; writes
    /// outside it fail.
    fn visit(
        &self,
        source: &Canvas,
        x: i32,
        y: i32,
        band: &mut Band,
        scratch: &mut Self::Scratch,
    ) -> FilterResult<()>;
}

/// A visitor run over a canvas in parallel column partitions
pub struct ParallelTransform<V: PixelVisitor> {
    source: Canvas,
    visitor: Arc<V>,
    job: PartitionJob<Band>,
    output: OnceLock<Canvas>,
}

impl<V: PixelVisitor> ParallelTransform<V> {
    /// Create a transform with the default thread count (4)
    ///
    /// # Errors
    ///
    /// See [`ParallelTransform::with_threads`].
    pub fn new(source: &Canvas, visitor: V) -> FilterResult<Self> {
        Self::with_threads(source, visitor, DEFAULT_THREADS)
    }

    /// Create a transform with `threads` partitions (capped at the width)
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameters` error if `threads` is zero.
    pub fn with_threads(source: &Canvas, visitor: V, threads: usize) -> FilterResult<Self> {
        let visitor = Arc::new(visitor);
        let task_visitor = Arc::clone(&visitor);
        let task_source = source.clone();
        let height = source.height();

        let job = PartitionJob::new(source.width(), threads, move |columns| {
            let mut band = Band::new(columns.clone(), height);
            let mut scratch = V::Scratch::default();
            for y in 0..height as i32 {
                for x in columns.clone() {
                    task_visitor.visit(&task_source, x as i32, y, &mut band, &mut scratch)?;
                }
            }
            Ok(band)
        })?;

        Ok(Self {
            source: source.clone(),
            visitor,
            job,
            output: OnceLock::new(),
        })
    }

    /// The source canvas
    pub fn source(&self) -> &Canvas {
        &self.source
    }

    /// The visitor run on every pixel
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// Number of partitions
    pub fn partition_count(&self) -> usize {
        self.job.ranges().len()
    }

    /// Current status
    pub fn status(&self) -> TransformStatus {
        self.job.status()
    }

    /// Messages recorded by failed partitions
    pub fn messages(&self) -> Vec<String> {
        self.job.messages()
    }

    /// Dispatch every partition
    ///
    /// # Errors
    ///
    /// Returns an `InvalidState` error if already started.
    pub fn start(&mut self) -> FilterResult<()> {
        self.job.start()
    }

    /// Block until every partition has finished
    ///
    /// # Errors
    ///
    /// See [`PartitionJob::wait_until_finished`].
    pub fn wait_until_finished(&self, timeout: Option<Duration>) -> FilterResult<()> {
        self.job.wait_until_finished(timeout)
    }

    /// The output canvas
    ///
    /// # Errors
    ///
    /// Returns an `InvalidState` error unless the transform succeeded.
    pub fn output(&self) -> FilterResult<Canvas> {
        if let Some(canvas) = self.output.get() {
            return Ok(canvas.clone());
        }
        let (w, h) = self.source.dimensions();
        let canvas = self.job.with_results(|bands| stitch(w, h, bands))??;
        Ok(self.output.get_or_init(|| canvas).clone())
    }

    /// Start, wait without a time limit, and return the output
    ///
    /// # Errors
    ///
    /// Returns the first error of the three steps.
    pub fn run(mut self) -> FilterResult<Canvas> {
        self.start()?;
        self.wait_until_finished(None)?;
        self.output()
    }
}
