//! Luminance histograms

use tessera_core::Pixel;

/// Number of luminance buckets
pub const BUCKETS: usize = 256;

/// Counts of pixels per luminance value
#[derive(Debug, Clone)]
pub struct LuminanceHistogram {
    counts: [u32; BUCKETS],
    total: u32,
}

impl Default for LuminanceHistogram {
    fn default() -> Self {
        Self {
            counts: [0; BUCKETS],
            total: 0,
        }
    }
}

impl LuminanceHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one pixel
    pub fn push(&mut self, p: &Pixel) {
        self.counts[p.luminance() as usize] += 1;
        self.total += 1;
    }

    /// Number of pixels counted
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Count of the bucket for `luminance`
    pub fn count(&self, luminance: u8) -> u32 {
        self.counts[luminance as usize]
    }

    /// Number of non-empty buckets
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }

    /// Non-empty buckets ordered by count (descending), then luminance
    fn ranked(&self) -> impl Iterator<Item = u8> + '_ {
        let mut order: Vec<u8> = (0..=255u8).filter(|&l| self.counts[l as usize] > 0).collect();
        order.sort_by(|&a, &b| {
            self.counts[b as usize]
                .cmp(&self.counts[a as usize])
                .then(a.cmp(&b))
        });
        order.into_iter()
    }

    /// Most populated luminance (the lowest one on ties)
    pub fn peak(&self) -> Option<u8> {
        self.ranked().next()
    }

    /// `127 - |peak - 127|`, 0 for an empty histogram
    ///
    /// Highest for a peak at mid-gray, lowest for black or white.
    pub fn midtone_score(&self) -> u32 {
        self.peak()
            .map_or(0, |p| 127u32.saturating_sub((p as i32 - 127).unsigned_abs()))
    }

    /// Luminance distance between the two most populated buckets
    ///
    /// 0 when fewer than two buckets are populated.
    pub fn contrast_score(&self) -> u32 {
        let mut ranked = self.ranked();
        match (ranked.next(), ranked.next()) {
            (Some(top), Some(bottom)) => (top as i32 - bottom as i32).unsigned_abs(),
            _ => 0,
        }
    }
}

impl<'a> FromIterator<&'a Pixel> for LuminanceHistogram {
    fn from_iter<I: IntoIterator<Item = &'a Pixel>>(iter: I) -> Self {
        let mut h = Self::new();
        for p in iter {
            h.push(p);
        }
        h
    }
}
