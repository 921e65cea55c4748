//! Summed-area tables
//!
//! `table[(y + 1) * (w + 1) + (x + 1)]` holds the sum of every value with
//! coordinates `<= (x, y)`, so any rectangle sum takes four lookups.

/// Summed-area table over a `width` × `height` grid of `u64` values
#[derive(Debug, Clone)]
pub struct SummedAreaTable {
    data: Vec<u64>,
    width: u32,
    height: u32,
}

impl SummedAreaTable {
    /// Build from a value function called once per cell
    pub fn from_fn(width: u32, height: u32, mut value: impl FnMut(u32, u32) -> u64) -> Self {
        let stride = width as usize + 1;
        let mut data = vec![0u64; stride * (height as usize + 1)];
        for y in 0..height {
            let mut row = 0u64;
            for x in 0..width {
                row += value(x, y);
                let idx = (y as usize + 1) * stride + x as usize + 1;
                data[idx] = data[idx - stride] + row;
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Get the width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sum of the `w` × `h` rectangle at `(x, y)`, `None` if it does not fit
    pub fn sum_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Option<u64> {
        if x.checked_add(w)? > self.width || y.checked_add(h)? > self.height {
            return None;
        }
        let stride = self.width as usize + 1;
        let at = |cx: u32, cy: u32| self.data[cy as usize * stride + cx as usize];
        Some(at(x + w, y + h) + at(x, y) - at(x, y + h) - at(x + w, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_sums() {
        // value = x + 10 * y on a 3x2 grid
        let t = SummedAreaTable::from_fn(3, 2, |x, y| (x + 10 * y) as u64);
        assert_eq!(t.sum_rect(0, 0, 3, 2), Some(36));
        assert_eq!(t.sum_rect(1, 1, 2, 1), Some(23));
        assert_eq!(t.sum_rect(2, 0, 1, 2), Some(14));
        assert_eq!(t.sum_rect(0, 0, 0, 0), Some(0));
        assert_eq!(t.sum_rect(2, 0, 2, 1), None);
    }
}
