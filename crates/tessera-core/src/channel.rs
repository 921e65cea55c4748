//! Fixed-point channel values
//!
//! A [`Channel`] is an integer in `0..=255`. Construction from wider
//! integers saturates; the `checked_*` arithmetic reports leaving the range
//! as [`Error::ChannelOverflow`] instead.

use crate::error::{Error, Result};
use std::fmt;

/// A single 0–255 channel value (color component or opacity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Channel(u8);

impl Channel {
    /// Fully off (0).
    pub const MIN: Channel = Channel(0);
    /// Fully on (255).
    pub const MAX: Channel = Channel(255);

    /// Create a channel, clamping `value` into `0..=255`.
    #[inline]
    pub fn new(value: i32) -> Self {
        Channel(value.clamp(0, 255) as u8)
    }

    /// Create a channel from a raw byte.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        Channel(value)
    }

    /// Create a channel from a percentage (0–100), rounding to nearest.
    pub fn from_percent(percent: u32) -> Self {
        let p = percent.min(100);
        Channel(((p * 255 + 50) / 100) as u8)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Get the value as a fraction of 255.
    #[inline]
    pub fn fraction(self) -> f32 {
        self.0 as f32 / 255.0
    }

    /// Add with clamping at 255 (or 0 for negative `delta`).
    #[inline]
    pub fn saturating_add(self, delta: i32) -> Self {
        Channel::new(self.0 as i32 + delta)
    }

    /// Subtract with clamping at 0 (or 255 for negative `delta`).
    #[inline]
    pub fn saturating_sub(self, delta: i32) -> Self {
        Channel::new(self.0 as i32 - delta)
    }

    /// Add, failing if the result leaves `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOverflow`] with the unclamped result.
    pub fn checked_add(self, delta: i32) -> Result<Self> {
        let value = self.0 as i32 + delta;
        if !(0..=255).contains(&value) {
            return Err(Error::ChannelOverflow { value });
        }
        Ok(Channel(value as u8))
    }

    /// Subtract, failing if the result leaves `0..=255`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelOverflow`] with the unclamped result.
    pub fn checked_sub(self, delta: i32) -> Result<Self> {
        self.checked_add(-delta)
    }

    /// In-place saturating add, for local scratch values only.
    #[inline]
    pub fn add_assign_saturating(&mut self, delta: i32) {
        *self = self.saturating_add(delta);
    }

    /// Absolute difference between two channels.
    #[inline]
    pub fn abs_diff(self, other: Channel) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Move toward `target` by `weight / 255`, rounding to nearest.
    #[inline]
    pub(crate) fn mix(self, target: Channel, weight: Channel) -> Channel {
        let from = self.0 as i32;
        let diff = target.0 as i32 - from;
        let w = weight.0 as i32;
        // Round half away from zero so +d and -d move by the same amount.
        let step = if diff >= 0 {
            (diff * w + 127) / 255
        } else {
            -((-diff * w + 127) / 255)
        };
        Channel::new(from + step)
    }
}

impl From<u8> for Channel {
    fn from(value: u8) -> Self {
        Channel(value)
    }
}

impl From<Channel> for u8 {
    fn from(c: Channel) -> Self {
        c.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        assert_eq!(Channel::new(-5).value(), 0);
        assert_eq!(Channel::new(300).value(), 255);
        assert_eq!(Channel::new(42).value(), 42);
    }

    #[test]
    fn test_saturating_arith() {
        assert_eq!(Channel::new(250).saturating_add(10), Channel::MAX);
        assert_eq!(Channel::new(5).saturating_sub(10), Channel::MIN);
        assert_eq!(Channel::new(5).saturating_add(-10), Channel::MIN);
    }

    #[test]
    fn test_checked_arith() {
        assert_eq!(Channel::new(250).checked_add(5).unwrap().value(), 255);
        assert_eq!(
            Channel::new(250).checked_add(6),
            Err(Error::ChannelOverflow { value: 256 })
        );
        assert_eq!(
            Channel::new(3).checked_sub(4),
            Err(Error::ChannelOverflow { value: -1 })
        );
    }

    #[test]
    fn test_from_percent() {
        assert_eq!(Channel::from_percent(0), Channel::MIN);
        assert_eq!(Channel::from_percent(100), Channel::MAX);
        assert_eq!(Channel::from_percent(50).value(), 128);
        assert_eq!(Channel::from_percent(250), Channel::MAX);
    }

    #[test]
    fn test_mix() {
        let a = Channel::new(10);
        let b = Channel::new(210);
        assert_eq!(a.mix(b, Channel::MIN), a);
        assert_eq!(a.mix(b, Channel::MAX), b);
        assert_eq!(b.mix(a, Channel::MAX), a);
        assert_eq!(a.mix(b, Channel::new(128)).value(), 110);
    }
}
