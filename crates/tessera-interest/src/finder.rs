//! Interest-window search
//!
//! [`ThumbnailFinder`] locates the most interesting rectangular window of a
//! canvas in two passes:
//!
//! 1. **Scoring** ([`ThumbnailFinder::score`]): the canvas is divided into
//!    `x_sections` × `y_sections` cells and the circle around each cell
//!    center is scored (see [`InterestArea`]). Columns of cells are scored
//!    in parallel on a [`PartitionJob`]; the caller blocks on
//!    [`ScoringJob::wait_until_finished`] before reading the grid.
//! 2. **Search** ([`ThumbnailFinder::search`]): every sub-grid whose size
//!    lies within the configured bounds is ranked by the mean normalized
//!    score of its cells. The first maximum found wins.
//!
//! ```text
//!   +-----+-----+-----+        cell (i, j): step_x × step_y pixels
//!   |  o  |  o  |  o  |        o = sample center
//!   +-----+-----+-----+        radius = min(step_x, step_y) / 2
//!   |  o  |  o  |  o  |
//!   +-----+-----+-----+
//! ```

use crate::area::{InterestArea, InterestGrid};
use crate::error::{InterestError, InterestResult};
use crate::integral::SummedAreaTable;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tessera_core::{Bounds, Canvas, Coord};
use tessera_filter::{DEFAULT_THREADS, PartitionJob, TransformStatus};
use tessera_region::CircleCache;

/// Options for the interest-window search
#[derive(Debug, Clone)]
pub struct ThumbnailOptions {
    /// Number of grid columns
    pub x_sections: u32,
    /// Number of grid rows
    pub y_sections: u32,
    /// Smallest window, in cells (columns, rows)
    pub min_cells: (u32, u32),
    /// Largest window, in cells (columns, rows); clamped to the grid
    pub max_cells: (u32, u32),
    /// Monte Carlo pairs per neighbor distance for sharpness
    pub samples: u32,
    /// Base RNG seed; area `k` uses `seed ^ k`
    pub seed: u64,
    /// Number of partitions for the scoring pass
    pub threads: usize,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            x_sections: 8,
            y_sections: 8,
            min_cells: (2, 2),
            max_cells: (4, 4),
            samples: 64,
            seed: 0,
            threads: DEFAULT_THREADS,
        }
    }
}

impl ThumbnailOptions {
    /// Set the grid size
    pub fn with_sections(mut self, x_sections: u32, y_sections: u32) -> Self {
        self.x_sections = x_sections;
        self.y_sections = y_sections;
        self
    }

    /// Set the smallest window in cells
    pub fn with_min_cells(mut self, x: u32, y: u32) -> Self {
        self.min_cells = (x, y);
        self
    }

    /// Set the largest window in cells
    pub fn with_max_cells(mut self, x: u32, y: u32) -> Self {
        self.max_cells = (x, y);
        self
    }

    /// Set the Monte Carlo sample count
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Set the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of scoring partitions
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    fn check_grid(&self) -> InterestResult<()> {
        if self.x_sections == 0 || self.y_sections == 0 {
            return Err(InterestError::InvalidParameters(format!(
                "grid must have at least one cell, got {}x{}",
                self.x_sections, self.y_sections
            )));
        }
        Ok(())
    }

    /// Window size bounds clamped to a `columns` × `rows` grid
    fn window_limits(&self, columns: u32, rows: u32) -> InterestResult<((u32, u32), (u32, u32))> {
        let (min_x, min_y) = (self.min_cells.0.max(1), self.min_cells.1.max(1));
        let (max_x, max_y) = (self.max_cells.0.min(columns), self.max_cells.1.min(rows));
        if min_x > max_x || min_y > max_y {
            return Err(InterestError::InvalidParameters(format!(
                "no window between {:?} and {:?} cells fits a {}x{} grid",
                self.min_cells, self.max_cells, columns, rows
            )));
        }
        Ok(((min_x, min_y), (max_x, max_y)))
    }
}

/// Scoring pass running in the background
///
/// Created by [`ThumbnailFinder::score`], already started.
pub struct ScoringJob {
    job: PartitionJob<Vec<InterestArea>>,
    sections: (u32, u32),
    canvas_size: (u32, u32),
    grid: OnceLock<InterestGrid>,
}

impl ScoringJob {
    /// Current status of the scoring pass
    pub fn status(&self) -> TransformStatus {
        self.job.status()
    }

    /// Messages recorded by failed partitions
    pub fn messages(&self) -> Vec<String> {
        self.job.messages()
    }

    /// Block until every column of areas has been scored
    ///
    /// # Errors
    ///
    /// Returns a filter `Timeout` or `AggregateFailure` error as described
    /// on [`PartitionJob::wait_until_finished`].
    pub fn wait_until_finished(&self, timeout: Option<Duration>) -> InterestResult<()> {
        Ok(self.job.wait_until_finished(timeout)?)
    }

    /// The scored, normalized grid
    ///
    /// # Errors
    ///
    /// Returns a filter `InvalidState` error until the pass has succeeded.
    pub fn grid(&self) -> InterestResult<InterestGrid> {
        if let Some(grid) = self.grid.get() {
            return Ok(grid.clone());
        }
        let (xs, ys) = self.sections;
        let areas = self.job.with_results(|columns| columns.concat())?;
        let grid = InterestGrid::from_columns(xs, ys, self.canvas_size, areas).ok_or_else(|| {
            InterestError::InvalidParameters("scored area count does not match grid".to_string())
        })?;
        Ok(self.grid.get_or_init(|| grid).clone())
    }
}

/// Finds the most interesting window of a canvas
#[derive(Debug, Clone)]
pub struct ThumbnailFinder {
    options: ThumbnailOptions,
    cache: Arc<CircleCache>,
}

impl ThumbnailFinder {
    /// Create a finder with its own circle cache
    pub fn new(options: ThumbnailOptions) -> Self {
        Self::with_cache(options, Arc::new(CircleCache::new()))
    }

    /// Create a finder sharing an existing circle cache
    pub fn with_cache(options: ThumbnailOptions, cache: Arc<CircleCache>) -> Self {
        Self { options, cache }
    }

    /// The search options
    pub fn options(&self) -> &ThumbnailOptions {
        &self.options
    }

    /// The circle cache used for sample areas
    pub fn cache(&self) -> &Arc<CircleCache> {
        &self.cache
    }

    /// Start scoring every grid cell of `canvas`
    ///
    /// # Errors
    ///
    /// Returns [`InterestError::InvalidParameters`] if the grid is empty or
    /// has more sections than the canvas has pixels along an axis, and a
    /// filter error if the job cannot start.
    pub fn score(&self, canvas: &Canvas) -> InterestResult<ScoringJob> {
        let opts = &self.options;
        opts.check_grid()?;
        let (w, h) = canvas.dimensions();
        if opts.x_sections > w || opts.y_sections > h {
            return Err(InterestError::InvalidParameters(format!(
                "{}x{} sections do not fit a {}x{} canvas",
                opts.x_sections, opts.y_sections, w, h
            )));
        }

        let (xs, ys) = (opts.x_sections, opts.y_sections);
        let step_x = w / xs;
        let step_y = h / ys;
        let radius = (step_x.min(step_y) / 2).max(1);
        let samples = opts.samples;
        let seed = opts.seed;
        let cache = Arc::clone(&self.cache);
        let source = canvas.clone();

        let mut job = PartitionJob::new(xs, opts.threads, move |columns| {
            let mut areas = Vec::with_capacity(columns.len() * ys as usize);
            for i in columns {
                for j in 0..ys {
                    let center = Coord::new(
                        (i * step_x + step_x / 2) as i32,
                        (j * step_y + step_y / 2) as i32,
                    );
                    let index = j as u64 * xs as u64 + i as u64;
                    let mut rng = StdRng::seed_from_u64(seed ^ index);
                    areas.push(InterestArea::score(
                        &source, center, radius, &cache, samples, &mut rng,
                    ));
                }
            }
            Ok(areas)
        })?;
        job.start()?;

        log::debug!(
            "scoring {}x{} areas (step {}x{}, radius {}) on {}x{}",
            xs,
            ys,
            step_x,
            step_y,
            radius,
            w,
            h
        );
        Ok(ScoringJob {
            job,
            sections: (xs, ys),
            canvas_size: (w, h),
            grid: OnceLock::new(),
        })
    }

    /// Find the sub-grid with the highest mean normalized score
    ///
    /// Returns the pixel bounds spanned by the winning sub-grid's corner
    /// areas.
    ///
    /// # Errors
    ///
    /// Returns [`InterestError::InvalidParameters`] if no window size within
    /// the configured bounds fits the grid.
    pub fn search(&self, grid: &InterestGrid) -> InterestResult<Bounds> {
        let (xs, ys) = grid.dimensions();
        let ((min_x, min_y), (max_x, max_y)) = self.options.window_limits(xs, ys)?;
        let table =
            SummedAreaTable::from_fn(xs, ys, |i, j| grid.normalized(i, j).unwrap_or(0) as u64);

        // Best (sum, cell count, top-left, bottom-right); compared as exact
        // ratios by cross-multiplying.
        let mut best: Option<(u64, u64, (u32, u32), (u32, u32))> = None;
        for j in 0..ys {
            for i in 0..xs {
                for l in j..ys {
                    let rows = l - j + 1;
                    if rows < min_y || rows > max_y {
                        continue;
                    }
                    for k in i..xs {
                        let cols = k - i + 1;
                        if cols < min_x || cols > max_x {
                            continue;
                        }
                        let Some(sum) = table.sum_rect(i, j, cols, rows) else {
                            continue;
                        };
                        let count = cols as u64 * rows as u64;
                        let better = match best {
                            None => true,
                            Some((best_sum, best_count, _, _)) => {
                                sum * best_count > best_sum * count
                            }
                        };
                        if better {
                            best = Some((sum, count, (i, j), (k, l)));
                        }
                    }
                }
            }
        }

        let Some((sum, count, (i, j), (k, l))) = best else {
            return Err(InterestError::InvalidParameters("no candidate window".to_string()));
        };
        let (w, h) = grid.canvas_size();
        let corner = |ci: u32, cj: u32| {
            grid.area(ci, cj)
                .and_then(|a| a.bounds(w, h))
                .ok_or_else(|| {
                    InterestError::InvalidParameters(format!("area ({}, {}) missing", ci, cj))
                })
        };
        let top_left = corner(i, j)?;
        let bottom_right = corner(k, l)?;
        let bounds = Bounds::new(
            top_left.x_min,
            bottom_right.x_max,
            top_left.y_min,
            bottom_right.y_max,
        );
        log::debug!(
            "best window cells ({}, {})..=({}, {}) mean {}/{} -> {:?}",
            i,
            j,
            k,
            l,
            sum,
            count,
            bounds
        );
        Ok(bounds)
    }

    /// Score `canvas`, wait for the scoring pass, and search
    ///
    /// # Errors
    ///
    /// Returns the first error of [`ThumbnailFinder::score`], the wait, or
    /// [`ThumbnailFinder::search`].
    pub fn find(&self, canvas: &Canvas) -> InterestResult<Bounds> {
        let job = self.score(canvas)?;
        job.wait_until_finished(None)?;
        self.search(&job.grid()?)
    }
}
