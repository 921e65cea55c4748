//! Selections
//!
//! A [`Selection`] is a set of coordinates together with three derived
//! caches:
//!
//! - **border**: members with at least one 8-neighbor outside the selection
//! - **neighbors**: non-members 8-adjacent to a member
//! - **centroid**: the integer-truncated mean of all members
//!
//! Single-coordinate [`Selection::add`] keeps the caches current
//! incrementally by looking only at the 3×3 block around the new member.
//! [`Selection::add_all`] inserts in bulk and rebuilds the caches once.
//!
//! Selections are canvas-agnostic: coordinates may lie off any particular
//! canvas, and the caches treat an off-canvas cell like any other
//! non-member.

use crate::circle::CircleCache;
use crate::error::RegionResult;
use std::collections::BTreeSet;
use tessera_core::{Bounds, Canvas, CanvasMut, Coord, Pixel};

/// Relation of a coordinate to a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordClass {
    /// Member whose 8 neighbors are all members
    Interior,
    /// Member with at least one non-member neighbor
    Border,
    /// Non-member adjacent to a member
    Neighbor,
    /// Neither a member nor adjacent to one
    Unrelated,
}

/// A growable coordinate set with cached border, neighbors and centroid
#[derive(Debug, Clone, Default)]
pub struct Selection {
    coords: BTreeSet<Coord>,
    border: BTreeSet<Coord>,
    neighbors: BTreeSet<Coord>,
    start: Option<Coord>,
    sum_x: i64,
    sum_y: i64,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection whose first member is `start`
    ///
    /// `start` is kept as the reference point for
    /// [`Selection::get_roundest_neighbor`].
    pub fn with_start(start: Coord) -> Self {
        let mut sel = Self {
            start: Some(start),
            ..Self::default()
        };
        sel.add(start);
        sel
    }

    /// Create a filled circle of `radius` around `center`
    ///
    /// `center` becomes the selection's start coordinate.
    pub fn circle(center: Coord, radius: u32, cache: &CircleCache) -> Self {
        let mut sel = Self {
            start: Some(center),
            ..Self::default()
        };
        let offsets = cache.offsets(radius);
        let cells: Vec<Coord> = offsets
            .iter()
            .map(|&(dx, dy)| center.offset(dx, dy))
            .collect();
        sel.add_all(&cells);
        sel
    }

    /// Add one coordinate, updating the caches incrementally
    ///
    /// Returns `false` if the coordinate was already a member.
    pub fn add(&mut self, c: Coord) -> bool {
        if !self.coords.insert(c) {
            return false;
        }
        self.sum_x += c.x as i64;
        self.sum_y += c.y as i64;
        self.neighbors.remove(&c);

        let mut exposed = false;
        for n in c.neighbors8() {
            if self.coords.contains(&n) {
                // `c` may have closed the last gap around `n`
                if self.is_enclosed(n) {
                    self.border.remove(&n);
                }
            } else {
                exposed = true;
                self.neighbors.insert(n);
            }
        }
        if exposed {
            self.border.insert(c);
        }
        true
    }

    /// Add many coordinates and rebuild the caches once
    ///
    /// Returns the number of coordinates that were new.
    pub fn add_all<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coord>) -> usize {
        let mut added = 0;
        for &c in coords {
            if self.coords.insert(c) {
                self.sum_x += c.x as i64;
                self.sum_y += c.y as i64;
                added += 1;
            }
        }
        if added > 0 {
            self.rebuild_caches();
        }
        log::trace!("bulk add: {} new of {} members", added, self.coords.len());
        added
    }

    fn is_enclosed(&self, c: Coord) -> bool {
        c.neighbors8().all(|n| self.coords.contains(&n))
    }

    fn rebuild_caches(&mut self) {
        self.border.clear();
        self.neighbors.clear();
        for &c in &self.coords {
            for n in c.neighbors8() {
                if !self.coords.contains(&n) {
                    self.border.insert(c);
                    self.neighbors.insert(n);
                }
            }
        }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.coords.contains(&c)
    }

    /// Number of members
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Check whether the selection has no members
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// All members in row-major order
    pub fn coords(&self) -> &BTreeSet<Coord> {
        &self.coords
    }

    /// Members with at least one non-member neighbor
    pub fn border(&self) -> &BTreeSet<Coord> {
        &self.border
    }

    /// Non-members adjacent to the selection
    pub fn neighbors(&self) -> &BTreeSet<Coord> {
        &self.neighbors
    }

    /// Members that are not on the border
    pub fn interior(&self) -> impl Iterator<Item = &Coord> {
        self.coords.iter().filter(|c| !self.border.contains(c))
    }

    /// Integer-truncated mean of all members, `None` when empty
    pub fn centroid(&self) -> Option<Coord> {
        let n = self.coords.len() as i64;
        if n == 0 {
            return None;
        }
        Some(Coord::new((self.sum_x / n) as i32, (self.sum_y / n) as i32))
    }

    /// Coordinate the selection was started from, if any
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    /// Classify a coordinate relative to this selection
    pub fn classify(&self, c: Coord) -> CoordClass {
        if self.coords.contains(&c) {
            if self.border.contains(&c) {
                CoordClass::Border
            } else {
                CoordClass::Interior
            }
        } else if self.neighbors.contains(&c) {
            CoordClass::Neighbor
        } else {
            CoordClass::Unrelated
        }
    }

    /// Smallest box enclosing every member
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::enclosing(&self.coords)
    }

    /// Copy of this selection restricted to coordinates on `canvas`
    ///
    /// The start coordinate is kept if it lies on the canvas.
    pub fn clip_to(&self, canvas: &Canvas) -> Selection {
        let mut out = Selection {
            start: self.start.filter(|s| canvas.contains_coord(*s)),
            ..Selection::default()
        };
        let inside: Vec<Coord> = self
            .coords
            .iter()
            .copied()
            .filter(|c| canvas.contains_coord(*c))
            .collect();
        out.add_all(&inside);
        out
    }

    /// Mean pixel of the members that lie on `canvas`
    ///
    /// # Errors
    ///
    /// Returns a core `EmptyInput` error if no member lies on the canvas.
    pub fn get_average(&self, canvas: &Canvas) -> RegionResult<Pixel> {
        Ok(canvas.get_average(&self.coords)?)
    }

    /// Write `pixel` at every member
    ///
    /// # Errors
    ///
    /// Returns a core `OutOfRange` error, writing nothing, if any member
    /// lies off the canvas.
    pub fn paint(&self, canvas: &mut CanvasMut, pixel: Pixel) -> RegionResult<()> {
        canvas.set_many(&self.coords, pixel)?;
        Ok(())
    }
}

impl FromIterator<Coord> for Selection {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let coords: Vec<Coord> = iter.into_iter().collect();
        let mut sel = Selection::new();
        sel.add_all(&coords);
        sel
    }
}
