//! Error types for tree node operations.
//!
//! This module defines structured error types for the dynamic tree model,
//! covering text parsing and serialization, list bounds, and typed
//! conversions out of a [`Node`](super::Node).

use thiserror::Error;

/// Structured error types for node operations.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NodeError {
    /// Text could not be parsed as serialized tree data
    #[error("Failed to parse tree data: {reason}")]
    ParseFailed { reason: String },

    /// A node could not be rendered to text
    #[error("Failed to serialize tree data: {reason}")]
    SerializationFailed { reason: String },

    /// A list index was outside the current list length
    #[error("List index {index} out of bounds (length {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A node had a different kind than the caller asked for
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl NodeError {
    /// Check if this error came from parsing text
    pub fn is_parse_error(&self) -> bool {
        matches!(self, NodeError::ParseFailed { .. })
    }

    /// Check if this error came from rendering text
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, NodeError::SerializationFailed { .. })
    }

    /// Check if this error is a list bounds violation
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, NodeError::IndexOutOfBounds { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, NodeError::TypeMismatch { .. })
    }
}

impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
