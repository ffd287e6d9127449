//! Error types for the session layer.

use thiserror::Error;
use weightpaint_core::CoreError;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a stroke or batch operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An operator rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The weight vector read from the store does not cover the mesh.
    /// Usually means the mesh topology changed under the paint session.
    #[error("weight vector length {actual} does not match mesh vertex count {expected}")]
    WeightCountMismatch { expected: usize, actual: usize },
}

impl SessionError {
    /// Creates a new weight-count mismatch error.
    pub fn weight_count_mismatch(expected: usize, actual: usize) -> Self {
        Self::WeightCountMismatch { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::weight_count_mismatch(100, 96);
        assert!(err.to_string().contains("96"));
        assert!(err.to_string().contains("100"));

        let err = SessionError::from(CoreError::vertex_out_of_range(7, 4));
        assert!(err.to_string().contains("vertex id 7"));
    }
}
