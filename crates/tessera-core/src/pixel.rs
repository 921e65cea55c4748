//! ARGB pixels
//!
//! A [`Pixel`] is an opacity channel plus red, green and blue channels.
//! Monochrome pixels carry the same value in all three color channels.
//!
//! # Blending
//!
//! [`Pixel::blend`] moves the receiver's color channels toward another pixel,
//! weighted by the *other* pixel's opacity. The receiver's own opacity is
//! neither used as a weight nor modified.
//!
//! # Equality
//!
//! `==` compares channels exactly. Comparisons by luminance go through
//! [`Pixel::cmp_luminance`] or the [`ByLuminance`] wrapper.

use crate::channel::Channel;
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// An ARGB pixel.
///
/// Equality is exact per channel. To compare or sort pixels by luminance,
/// wrap them in [`ByLuminance`] or call [`Pixel::cmp_luminance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    /// Opacity (0 = transparent, 255 = opaque)
    pub opacity: Channel,
    /// Red channel
    pub red: Channel,
    /// Green channel
    pub green: Channel,
    /// Blue channel
    pub blue: Channel,
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::rgb(0, 0, 0)
    }
}

impl Pixel {
    /// Transparent black; what an empty canvas slot reads as.
    pub const TRANSPARENT: Pixel = Pixel {
        opacity: Channel::MIN,
        red: Channel::MIN,
        green: Channel::MIN,
        blue: Channel::MIN,
    };

    /// Create an opaque pixel.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Pixel {
            opacity: Channel::MAX,
            red: Channel::from_u8(r),
            green: Channel::from_u8(g),
            blue: Channel::from_u8(b),
        }
    }

    /// Create a pixel with explicit opacity.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Pixel {
            opacity: Channel::from_u8(a),
            red: Channel::from_u8(r),
            green: Channel::from_u8(g),
            blue: Channel::from_u8(b),
        }
    }

    /// Create an opaque monochrome pixel.
    pub const fn gray(value: u8) -> Self {
        Pixel::rgb(value, value, value)
    }

    /// Return a copy with a different opacity.
    pub fn with_opacity(mut self, opacity: Channel) -> Self {
        self.opacity = opacity;
        self
    }

    /// Check whether all three color channels are equal.
    pub fn is_monochrome(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    /// Color channels as `[r, g, b]`.
    #[inline]
    pub fn channels(&self) -> [Channel; 3] {
        [self.red, self.green, self.blue]
    }

    /// Pack to `0xAARRGGBB`.
    #[inline]
    pub fn to_argb(&self) -> u32 {
        ((self.opacity.value() as u32) << 24)
            | ((self.red.value() as u32) << 16)
            | ((self.green.value() as u32) << 8)
            | self.blue.value() as u32
    }

    /// Unpack from `0xAARRGGBB`.
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        Pixel::argb(
            (argb >> 24) as u8,
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
        )
    }

    /// Weighted luminance, `(299 R + 587 G + 114 B) / 1000`.
    #[inline]
    pub fn luminance(&self) -> u8 {
        let sum = 299 * self.red.value() as u32
            + 587 * self.green.value() as u32
            + 114 * self.blue.value() as u32;
        (sum / 1000) as u8
    }

    /// Compare two pixels by luminance only.
    pub fn cmp_luminance(&self, other: &Pixel) -> Ordering {
        self.luminance().cmp(&other.luminance())
    }

    /// Blend `other` into this pixel, weighted by `other.opacity`.
    pub fn blend(&mut self, other: &Pixel) {
        let w = other.opacity;
        self.red = self.red.mix(other.red, w);
        self.green = self.green.mix(other.green, w);
        self.blue = self.blue.mix(other.blue, w);
    }

    /// Non-mutating [`Pixel::blend`].
    pub fn blended(mut self, other: &Pixel) -> Pixel {
        self.blend(other);
        self
    }

    /// Channel-wise absolute difference of the color channels (opaque).
    pub fn delta(&self, other: &Pixel) -> Pixel {
        Pixel::rgb(
            self.red.abs_diff(other.red),
            self.green.abs_diff(other.green),
            self.blue.abs_diff(other.blue),
        )
    }

    /// Sum of the three color channels.
    #[inline]
    pub fn channel_sum(&self) -> u32 {
        self.red.value() as u32 + self.green.value() as u32 + self.blue.value() as u32
    }

    /// Mean absolute color-channel difference.
    #[inline]
    pub fn difference(&self, other: &Pixel) -> u32 {
        self.delta(other).channel_sum() / 3
    }

    /// Channel-wise mean (including opacity).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for an empty slice.
    pub fn average(pixels: &[Pixel]) -> Result<Pixel> {
        if pixels.is_empty() {
            return Err(Error::EmptyInput("average of no pixels"));
        }
        let mut acc = ChannelSums::default();
        for p in pixels {
            acc.push(p);
        }
        Ok(acc.mean())
    }

    /// The pixel whose luminance is the (lower) median of the set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for an empty slice.
    pub fn median_by_luminance(pixels: &[Pixel]) -> Result<Pixel> {
        if pixels.is_empty() {
            return Err(Error::EmptyInput("median of no pixels"));
        }
        let mut sorted = pixels.to_vec();
        sorted.sort_by(|a, b| a.cmp_luminance(b));
        Ok(sorted[(sorted.len() - 1) / 2])
    }

    /// Per-channel (lower) median, including opacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for an empty slice.
    pub fn channel_median(pixels: &[Pixel]) -> Result<Pixel> {
        if pixels.is_empty() {
            return Err(Error::EmptyInput("median of no pixels"));
        }
        let mid = (pixels.len() - 1) / 2;
        let median_of = |f: fn(&Pixel) -> u8| -> u8 {
            let mut values: Vec<u8> = pixels.iter().map(f).collect();
            values.sort_unstable();
            values[mid]
        };
        Ok(Pixel::argb(
            median_of(|p| p.opacity.value()),
            median_of(|p| p.red.value()),
            median_of(|p| p.green.value()),
            median_of(|p| p.blue.value()),
        ))
    }
}

/// Running channel sums for averaging pixels without buffering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelSums {
    opacity: u64,
    red: u64,
    green: u64,
    blue: u64,
    count: u64,
}

impl ChannelSums {
    /// Add one pixel.
    pub fn push(&mut self, p: &Pixel) {
        self.opacity += p.opacity.value() as u64;
        self.red += p.red.value() as u64;
        self.green += p.green.value() as u64;
        self.blue += p.blue.value() as u64;
        self.count += 1;
    }

    /// Number of pixels added.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Integer mean of everything pushed; transparent black when empty.
    pub fn mean(&self) -> Pixel {
        if self.count == 0 {
            return Pixel::TRANSPARENT;
        }
        let n = self.count;
        Pixel::argb(
            (self.opacity / n) as u8,
            (self.red / n) as u8,
            (self.green / n) as u8,
            (self.blue / n) as u8,
        )
    }
}

/// Wrapper that orders and compares pixels by luminance.
#[derive(Debug, Clone, Copy)]
pub struct ByLuminance(pub Pixel);

impl PartialEq for ByLuminance {
    fn eq(&self, other: &Self) -> bool {
        self.0.luminance() == other.0.luminance()
    }
}

impl Eq for ByLuminance {}

impl PartialOrd for ByLuminance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByLuminance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_luminance(&other.0)
    }
}
