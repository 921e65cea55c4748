//! Transform status
//!
//! ```text
//!  Ready ──start──▶ Processing ──all partitions ok──▶ Success
//!                       │
//!                       └──any partition failed──▶ Failure
//! ```
//!
//! Transitions only move forward; nothing leaves `Success` or `Failure`.

use std::fmt;

/// Lifecycle of a parallel job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformStatus {
    /// Created, not started
    #[default]
    Ready,
    /// Partitions dispatched and running
    Processing,
    /// Every partition completed
    Success,
    /// At least one partition failed
    Failure,
}

impl TransformStatus {
    /// Check whether the status is terminal
    pub fn is_finished(self) -> bool {
        matches!(self, TransformStatus::Success | TransformStatus::Failure)
    }

    /// Check whether moving to `next` is a legal forward transition
    pub fn can_transition_to(self, next: TransformStatus) -> bool {
        use TransformStatus::*;
        matches!(
            (self, next),
            (Ready, Processing) | (Processing, Success) | (Processing, Failure)
        )
    }
}

impl fmt::Display for TransformStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformStatus::Ready => "ready",
            TransformStatus::Processing => "processing",
            TransformStatus::Success => "success",
            TransformStatus::Failure => "failure",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        use TransformStatus::*;
        assert!(Ready.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Failure));
        assert!(!Success.can_transition_to(Failure));
        assert!(!Failure.can_transition_to(Success));
        assert!(!Processing.can_transition_to(Ready));
        assert!(!Ready.can_transition_to(Success));
    }

    #[test]
    fn test_finished() {
        assert!(!TransformStatus::default().is_finished());
        assert!(TransformStatus::Failure.is_finished());
        assert_eq!(TransformStatus::Processing.to_string(), "processing");
    }
}
