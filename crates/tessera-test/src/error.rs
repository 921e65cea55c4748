//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture canvas could not be built
    #[error("failed to build fixture '{name}': {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: tessera_core::Error,
    },

    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Canvas comparison failed
    #[error("canvas comparison failed at index {index}")]
    CanvasMismatch { index: usize },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
