//! Region growing
//!
//! Two ways to grow a [`Selection`] over a canvas:
//!
//! - [`Selection::add_all_connected`] floods outward from every member,
//!   accepting 8-connected cells whose opacity reaches a fixed threshold.
//! - [`Selection::grow_round`] adds one neighbor at a time, always the one
//!   closest to the start coordinate, which keeps the shape roughly
//!   circular.

use crate::error::RegionResult;
use crate::selection::Selection;
use std::collections::{HashSet, VecDeque};
use tessera_core::{Canvas, Channel, Coord};

impl Selection {
    /// Add every cell 8-connected to the selection whose opacity is at
    /// least `threshold`
    ///
    /// Cells off the canvas are never added. Returns the number of cells
    /// added; a second call with the same canvas and threshold adds none.
    pub fn add_all_connected(&mut self, canvas: &Canvas, threshold: Channel) -> usize {
        let mut frontier: VecDeque<Coord> = self.coords().iter().copied().collect();
        let mut seen: HashSet<Coord> = frontier.iter().copied().collect();
        let mut added = 0;

        while let Some(c) = frontier.pop_front() {
            for n in c.neighbors8() {
                if !seen.insert(n) {
                    continue;
                }
                let qualifies = canvas
                    .get_coord(n)
                    .is_ok_and(|p| p.opacity >= threshold);
                if qualifies && self.add(n) {
                    added += 1;
                    frontier.push_back(n);
                }
            }
        }

        log::trace!(
            "add_all_connected: +{} cells (threshold {}), {} total",
            added,
            threshold,
            self.len()
        );
        added
    }

    /// The on-canvas neighbor closest to the start coordinate
    ///
    /// Falls back to the centroid when the selection has no start. With a
    /// `delta_threshold`, only neighbors whose color differs from the
    /// selection's average by at most that much are considered. Ties go
    /// to the first candidate in row-major order.
    ///
    /// # Errors
    ///
    /// Returns a core `EmptyInput` error when a threshold is given and no
    /// member lies on the canvas.
    pub fn get_roundest_neighbor(
        &self,
        canvas: &Canvas,
        delta_threshold: Option<u32>,
    ) -> RegionResult<Option<Coord>> {
        let Some(target) = self.start().or_else(|| self.centroid()) else {
            return Ok(None);
        };
        let average = match delta_threshold {
            Some(_) => Some(self.get_average(canvas)?),
            None => None,
        };

        let best = self
            .neighbors()
            .iter()
            .copied()
            .filter(|n| canvas.contains_coord(*n))
            .filter(|n| match (average, delta_threshold) {
                (Some(avg), Some(limit)) => canvas
                    .get_coord(*n)
                    .is_ok_and(|p| p.difference(&avg) <= limit),
                _ => true,
            })
            .min_by_key(|n| n.distance_squared(target));
        Ok(best)
    }

    /// Add up to `max_cells` roundest neighbors one at a time
    ///
    /// Stops early when no neighbor qualifies. Returns the number added.
    ///
    /// # Errors
    ///
    /// See [`Selection::get_roundest_neighbor`].
    pub fn grow_round(
        &mut self,
        canvas: &Canvas,
        max_cells: usize,
        delta_threshold: Option<u32>,
    ) -> RegionResult<usize> {
        let mut added = 0;
        while added < max_cells {
            match self.get_roundest_neighbor(canvas, delta_threshold)? {
                Some(c) => {
                    self.add(c);
                    added += 1;
                }
                None => break,
            }
        }
        Ok(added)
    }
}
