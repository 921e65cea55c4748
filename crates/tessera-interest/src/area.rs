//! Interest areas and grids
//!
//! An [`InterestArea`] scores the circular neighborhood of one sample
//! point:
//!
//! - **sharpness**: Monte Carlo neighbor delta inside the circle, sampled
//!   once at distance 1 and once at distance 2, averaged, divided by 3
//! - **contrast**: luminance distance between the two most populated
//!   histogram buckets
//! - **midtone**: closeness of the histogram peak to mid-gray
//!
//! The absolute interest is their sum. An [`InterestGrid`] holds the areas
//! of one search and their scores normalized to 0–100.

use crate::histogram::LuminanceHistogram;
use rand::Rng;
use tessera_core::{Bounds, Canvas, Coord, NeighborOffset};
use tessera_region::{CircleCache, Selection};

/// Score of one sample area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestArea {
    /// Sample point
    pub center: Coord,
    /// Radius of the sampled circle
    pub radius: u32,
    /// Local sharpness component
    pub sharpness: u32,
    /// Histogram contrast component
    pub contrast: u32,
    /// Midtone component
    pub midtone: u32,
    /// Absolute interest scaled to 0–100 within its grid
    pub normalized: u32,
}

impl InterestArea {
    /// Score the circle of `radius` around `center`
    ///
    /// Cells of the circle off the canvas are ignored. `samples` is the
    /// number of Monte Carlo pairs drawn for each neighbor distance.
    pub fn score<R: Rng + ?Sized>(
        canvas: &Canvas,
        center: Coord,
        radius: u32,
        cache: &CircleCache,
        samples: u32,
        rng: &mut R,
    ) -> Self {
        let circle = Selection::circle(center, radius, cache).clip_to(canvas);
        let coords: Vec<Coord> = circle.coords().iter().copied().collect();

        let mut histogram = LuminanceHistogram::new();
        for p in coords.iter().filter_map(|c| canvas.get_coord(*c).ok()) {
            histogram.push(&p);
        }

        let adjacent = canvas
            .get_average_delta_in(&coords, samples, NeighborOffset::Adjacent, rng)
            .channel_sum();
        let wide = canvas
            .get_average_delta_in(&coords, samples, NeighborOffset::Wide, rng)
            .channel_sum();

        Self {
            center,
            radius,
            sharpness: (adjacent + wide) / 2 / 3,
            contrast: histogram.contrast_score(),
            midtone: histogram.midtone_score(),
            normalized: 0,
        }
    }

    /// Sharpness + contrast + midtone
    pub fn absolute(&self) -> u32 {
        self.sharpness + self.contrast + self.midtone
    }

    /// The sampled square `center ± radius`, clamped to a canvas
    pub fn bounds(&self, width: u32, height: u32) -> Option<Bounds> {
        let r = self.radius as i32;
        Bounds::new(
            self.center.x - r,
            self.center.x + r,
            self.center.y - r,
            self.center.y + r,
        )
        .clamp_to(width, height)
    }
}

/// The scored areas of one search, `x_sections` × `y_sections`
#[derive(Debug, Clone)]
pub struct InterestGrid {
    x_sections: u32,
    y_sections: u32,
    canvas_size: (u32, u32),
    /// Column-major: area `(i, j)` at `i * y_sections + j`
    areas: Vec<InterestArea>,
}

impl InterestGrid {
    /// Assemble a grid from column-major areas and normalize their scores
    ///
    /// Returns `None` if the area count does not match the grid.
    pub fn from_columns(
        x_sections: u32,
        y_sections: u32,
        canvas_size: (u32, u32),
        areas: Vec<InterestArea>,
    ) -> Option<Self> {
        if areas.len() != x_sections as usize * y_sections as usize {
            return None;
        }
        let mut grid = Self {
            x_sections,
            y_sections,
            canvas_size,
            areas,
        };
        grid.normalize();
        Some(grid)
    }

    /// Scale every absolute score linearly into 0–100
    ///
    /// When every area has the same score, all normalize to 100.
    fn normalize(&mut self) {
        let min = self.areas.iter().map(InterestArea::absolute).min().unwrap_or(0);
        let max = self.areas.iter().map(InterestArea::absolute).max().unwrap_or(0);
        for area in &mut self.areas {
            area.normalized = if max == min {
                100
            } else {
                (area.absolute() - min) * 100 / (max - min)
            };
        }
    }

    /// Grid size in areas
    pub fn dimensions(&self) -> (u32, u32) {
        (self.x_sections, self.y_sections)
    }

    /// Size of the canvas the grid was scored on
    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Area in column `i`, row `j`
    pub fn area(&self, i: u32, j: u32) -> Option<&InterestArea> {
        if i >= self.x_sections || j >= self.y_sections {
            return None;
        }
        self.areas.get(i as usize * self.y_sections as usize + j as usize)
    }

    /// Normalized score of area `(i, j)`
    pub fn normalized(&self, i: u32, j: u32) -> Option<u32> {
        self.area(i, j).map(|a| a.normalized)
    }

    /// All areas, column by column
    pub fn areas(&self) -> &[InterestArea] {
        &self.areas
    }
}
