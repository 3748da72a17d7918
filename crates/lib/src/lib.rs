//! Collection: an insertion-ordered, dynamically typed key/value container.
//!
//! This library provides a single associative container, [`OrderedMap`], and the
//! [`Collection`] trait describing its operation surface, so callers can depend
//! on the contract rather than the concrete type.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A closed sum type covering null, booleans, integers,
//!   floats, text, nested maps and lists. Values support both strict and loose comparison.
//! * **OrderedMap (`map::OrderedMap`)**: String keys mapped to values, iterated in insertion
//!   order. Supports positional appends, default-fallback lookup, deep merge, full replace
//!   and an in-place bulk transform over every leaf value.
//! * **Collection (`traits::Collection`)**: The operation contract. Every mutating
//!   operation returns the container for chaining.
//!
//! ```
//! use collection::{Collection, OrderedMap, Value};
//!
//! let mut people = OrderedMap::new();
//! people.set("name", "Kaitlen").set("age", 24);
//!
//! assert_eq!(people.get_or("country", &Value::from("Australia")), "Australia");
//! assert_eq!(people.keys(), vec!["name", "age"]);
//! ```
//!
//! `OrderedMap` is a plain owned value. Sharing one between threads for mutation
//! requires external synchronization (for example a `Mutex`).

pub mod constants;
pub mod errors;
mod macros;
pub mod map;
pub mod traits;
pub mod value;

pub use errors::CollectionError;
pub use map::OrderedMap;
pub use traits::Collection;
pub use value::{Comparison, Value};

/// Result type used throughout the collection library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the collection library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured collection errors from the errors module
    #[error(transparent)]
    Collection(CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
        }
    }

    /// Check if this error is a rejected argument.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_invalid_argument(),
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_type_error(),
        }
    }

    /// Check if this error indicates nested data too deep to process.
    pub fn is_structural_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_structural_error(),
        }
    }
}
