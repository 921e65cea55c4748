//! Error types for tessera-interest

use thiserror::Error;

/// Errors that can occur during interest scoring and search
#[derive(Debug, Error)]
pub enum InterestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tessera_core::Error),

    /// Error from the partition framework running the scoring pass
    #[error("filter error: {0}")]
    Filter(#[from] tessera_filter::FilterError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for interest operations
pub type InterestResult<T> = Result<T, InterestError>;
