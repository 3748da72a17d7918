//! Error types for collection operations.
//!
//! This module defines the structured errors a collection can report. Lookup
//! misses and removal of absent keys are not errors; the variants here cover
//! rejected arguments, failed value conversions and structures nested too
//! deeply to walk.

use thiserror::Error;

/// Structured error types for collection operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CollectionError {
    /// An operation received an argument of the wrong shape
    #[error("Invalid argument to {operation}: expected {expected}, found {actual}")]
    InvalidArgument {
        operation: String,
        expected: String,
        actual: String,
    },

    /// A stored value could not be converted to the requested type
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// Nested data exceeded the supported recursion depth
    #[error("{operation} exceeded the maximum nesting depth of {limit}")]
    DepthExceeded { operation: String, limit: usize },
}

impl CollectionError {
    /// Check if this error is a rejected argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CollectionError::InvalidArgument { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, CollectionError::TypeMismatch { .. })
    }

    /// Check if this error describes a structural problem with nested data
    pub fn is_structural_error(&self) -> bool {
        matches!(self, CollectionError::DepthExceeded { .. })
    }

    /// Get the operation name if this is an operation-specific error
    pub fn operation(&self) -> Option<&str> {
        match self {
            CollectionError::InvalidArgument { operation, .. }
            | CollectionError::DepthExceeded { operation, .. } => Some(operation),
            _ => None,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
