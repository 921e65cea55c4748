//! Error types for tessera-filter

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur in parallel filter operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] tessera_core::Error),

    /// Operation not allowed in the job's current status
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A blocking wait ran out of time; the partitions keep running
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// One or more partitions failed
    #[error("{} partition(s) failed: {}", .messages.len(), .messages.join("; "))]
    AggregateFailure { messages: Vec<String> },

    /// The worker pool could not be created
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Failure reported by a single partition
    #[error("partition failed: {0}")]
    Partition(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
