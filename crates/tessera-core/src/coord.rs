//! Coordinates and pixel-space bounds

use std::cmp::Ordering;

/// Offsets of the 8-neighborhood, row-major order.
pub const NEIGHBOR_OFFSETS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A pixel coordinate.
///
/// Signed so that neighbors of edge pixels are representable. Ordered
/// row-major (by `y`, then `x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Offset this coordinate.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The 8 surrounding coordinates in row-major order.
    pub fn neighbors8(self) -> impl Iterator<Item = Coord> {
        NEIGHBOR_OFFSETS_8
            .iter()
            .map(move |&(dx, dy)| self.offset(dx, dy))
    }

    /// Squared Euclidean distance.
    #[inline]
    pub fn distance_squared(self, other: Coord) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

/// An inclusive pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Bounds {
    /// Create bounds from inclusive extremes (reordered if swapped).
    pub fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Bounds {
            x_min: x_min.min(x_max),
            x_max: x_min.max(x_max),
            y_min: y_min.min(y_max),
            y_max: y_min.max(y_max),
        }
    }

    /// Smallest bounds containing every coordinate, `None` if empty.
    pub fn enclosing<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut b = Bounds::new(first.x, first.x, first.y, first.y);
        for c in iter {
            b.x_min = b.x_min.min(c.x);
            b.x_max = b.x_max.max(c.x);
            b.y_min = b.y_min.min(c.y);
            b.y_max = b.y_max.max(c.y);
        }
        Some(b)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        (self.x_max - self.x_min + 1) as u32
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        (self.y_max - self.y_min + 1) as u32
    }

    /// Check whether a coordinate lies inside.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.x_min && c.x <= self.x_max && c.y >= self.y_min && c.y <= self.y_max
    }

    /// Intersect with `0..width` × `0..height`, `None` if disjoint.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        let x_min = self.x_min.max(0);
        let y_min = self.y_min.max(0);
        let x_max = self.x_max.min(width as i32 - 1);
        let y_max = self.y_max.min(height as i32 - 1);
        if x_min > x_max || y_min > y_max {
            return None;
        }
        Some(Bounds {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let mut v = vec![Coord::new(2, 0), Coord::new(0, 1), Coord::new(1, 0)];
        v.sort();
        assert_eq!(v, vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn test_neighbors8() {
        let n: Vec<Coord> = Coord::new(0, 0).neighbors8().collect();
        assert_eq!(n.len(), 8);
        assert_eq!(n[0], Coord::new(-1, -1));
        assert!(!n.contains(&Coord::new(0, 0)));
    }

    #[test]
    fn test_bounds() {
        let pts = [Coord::new(3, 4), Coord::new(-1, 2), Coord::new(5, 9)];
        let b = Bounds::enclosing(&pts).unwrap();
        assert_eq!(b, Bounds::new(-1, 5, 2, 9));
        assert_eq!(b.width(), 7);
        assert_eq!(b.height(), 8);
        assert_eq!(b.clamp_to(4, 4), Some(Bounds::new(0, 3, 2, 3)));
        assert_eq!(Bounds::new(10, 12, 0, 0).clamp_to(4, 4), None);
        assert!(Bounds::enclosing(&[]).is_none());
    }
}
