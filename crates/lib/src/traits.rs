//! The operation contract shared by collection implementations.
//!
//! [`Collection`] declares the operations every concrete collection exposes.
//! Code that only needs these operations can be written against the trait
//! (`fn load(target: &mut impl Collection)`) rather than against
//! [`OrderedMap`].

use crate::{Comparison, OrderedMap, Result, Value};

/// An ordered key/value collection.
///
/// Mutating operations return the collection itself so calls can be chained.
/// Operations that validate their input (`merge`, `replace`) return a
/// [`Result`] wrapping the collection and leave it untouched when they fail.
///
/// # Examples
///
/// ```
/// use collection::{Collection, OrderedMap};
///
/// fn describe(person: &mut impl Collection) -> collection::Result<()> {
///     person
///         .set("name", "Kaitlen")
///         .set("age", 24)
///         .merge(collection::collection! { "country" => "Australia" })?;
///     Ok(())
/// }
///
/// let mut person = OrderedMap::new();
/// describe(&mut person).unwrap();
/// assert_eq!(person.keys(), vec!["name", "age", "country"]);
/// ```
pub trait Collection {
    /// Appends a value under the next free positional key (`"0"`, `"1"`, ...).
    fn add(&mut self, value: impl Into<Value>) -> &mut Self;

    /// Inserts or overwrites the value stored at `key`.
    ///
    /// Overwriting keeps the key at its original position.
    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self;

    /// Gets the value stored at `key`, if the key is present.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Gets the value stored at `key`, or `default` when the key is absent.
    ///
    /// Presence is decided by the key alone: a key holding `Null` or any other
    /// falsy value still returns its stored value.
    fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Returns true if `key` is present, whatever its value.
    fn exists(&self, key: &str) -> bool;

    /// Removes `key` if present. Removing an absent key does nothing.
    fn remove(&mut self, key: &str) -> &mut Self;

    /// Returns an owned snapshot of every entry, in order.
    fn all(&self) -> OrderedMap;

    /// Deep-merges `data` into the collection.
    ///
    /// Where both the stored and incoming values are maps or lists they are
    /// merged recursively, a list acting as a map keyed by position. An
    /// incoming leaf, or any value landing on a stored leaf, replaces the
    /// stored one. Keys not yet present are appended.
    ///
    /// `data` must be a map or a list. Anything else is rejected with
    /// [`CollectionError::InvalidArgument`](crate::CollectionError::InvalidArgument),
    /// and data nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::constants::MAX_NESTING_DEPTH) with
    /// [`CollectionError::DepthExceeded`](crate::CollectionError::DepthExceeded).
    fn merge(&mut self, data: impl Into<Value>) -> Result<&mut Self>;

    /// Discards all entries and adopts `data` as the new contents.
    ///
    /// Accepts the same input as [`Collection::merge`].
    fn replace(&mut self, data: impl Into<Value>) -> Result<&mut Self>;

    /// Removes all entries.
    fn clear(&mut self) -> &mut Self;

    /// Returns the first key whose value strictly equals `value`.
    fn index_of(&self, value: &Value) -> Option<&str>;

    /// Returns every key, in insertion order.
    fn keys(&self) -> Vec<&str>;

    /// Returns the keys whose values equal `value` under `comparison`, in order.
    fn keys_where(&self, value: &Value, comparison: Comparison) -> Vec<&str>;

    /// Returns every value, in key insertion order.
    fn values(&self) -> Vec<&Value>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if the collection has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if some entry's **value** strictly equals `value`.
    ///
    /// Despite the name this tests value membership, not key membership. Use
    /// [`Collection::exists`] to test for a key.
    fn has_key(&self, value: &Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns true if some entry's value strictly equals `value`.
    fn contains_value(&self, value: &Value) -> bool {
        self.has_key(value)
    }
}
