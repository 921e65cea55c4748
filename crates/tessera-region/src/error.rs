//! Error types for tessera-region

use thiserror::Error;

/// Errors that can occur during selection and region operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tessera_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
