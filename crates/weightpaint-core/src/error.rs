//! Error types for weight-map operators.

use thiserror::Error;

/// Result type for core operator functions.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while applying a weight-map operator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A vertex id outside the weight vector. This is an integration
    /// error on the caller's side and is never silently clamped.
    #[error("vertex id {vertex} out of range for mesh with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}

impl CoreError {
    /// Creates a new out-of-range vertex error.
    pub fn vertex_out_of_range(vertex: usize, vertex_count: usize) -> Self {
        Self::VertexOutOfRange {
            vertex,
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::vertex_out_of_range(12, 8);
        assert!(err.to_string().contains("vertex id 12"));
        assert!(err.to_string().contains("8 vertices"));
    }
}
