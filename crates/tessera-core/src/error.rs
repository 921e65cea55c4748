//! Error types for tessera-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Tessera core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid canvas dimensions
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate outside the canvas
    #[error("coordinate ({x}, {y}) out of range for {width}x{height} canvas")]
    OutOfRange {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Canvas dimension mismatch
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        .expected.0,
        .expected.1,
        .actual.0,
        .actual.1
    )]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Checked channel arithmetic left [0, 255]
    #[error("channel overflow: {value} is outside 0..=255")]
    ChannelOverflow { value: i32 },

    /// Aggregate over an empty input
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
