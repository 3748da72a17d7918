//! Constants used throughout the collection library.
//!
//! This module provides central definitions for limits and other tunables
//! used by the recursive operations.

/// Maximum nesting depth walked by recursive operations (`merge`, `map`).
///
/// Nested data deeper than this is rejected with
/// [`CollectionError::DepthExceeded`](crate::CollectionError::DepthExceeded)
/// instead of recursing until the stack overflows.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Type name reported for values that are not a map or list when a mapping is required.
pub const MAPPING_EXPECTED: &str = "map or list";
