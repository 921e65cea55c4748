//! Cached circle offsets
//!
//! Circular selections are built from the list of `(dx, dy)` offsets whose
//! squared length is at most `radius²`. The lists are computed once per
//! radius and shared through a [`CircleCache`] that callers own and pass to
//! whatever needs circles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe cache of circle offsets keyed by radius
#[derive(Debug, Default)]
pub struct CircleCache {
    offsets: Mutex<HashMap<u32, Arc<[(i32, i32)]>>>,
}

impl CircleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Offsets of every cell within `radius` of the origin, row-major
    ///
    /// Radius 0 is the single cell `(0, 0)`.
    pub fn offsets(&self, radius: u32) -> Arc<[(i32, i32)]> {
        let mut map = self.offsets.lock().unwrap_or_else(PoisonError::into_inner);
        map.entry(radius)
            .or_insert_with(|| circle_offsets(radius))
            .clone()
    }

    /// Number of radii cached so far
    pub fn len(&self) -> usize {
        self.offsets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn circle_offsets(radius: u32) -> Arc<[(i32, i32)]> {
    let r = radius as i32;
    let r2 = r as i64 * r as i64;
    let mut out = Vec::new();
    for dy in -r..=r {
        for dx in -r..=r {
            if (dx as i64 * dx as i64 + dy as i64 * dy as i64) <= r2 {
                out.push((dx, dy));
            }
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_circles() {
        let cache = CircleCache::new();
        assert_eq!(&*cache.offsets(0), &[(0, 0)]);
        // radius 1: the plus shape
        assert_eq!(cache.offsets(1).len(), 5);
        // radius 2: 5x5 minus the 4 corners and the 8 cells next to them
        assert_eq!(cache.offsets(2).len(), 13);
    }

    #[test]
    fn test_entries_are_shared() {
        let cache = CircleCache::new();
        assert!(cache.is_empty());
        let a = cache.offsets(3);
        let b = cache.offsets(3);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }
}
