//! The insertion-ordered map at the heart of the library.
//!
//! [`OrderedMap`] stores string keys mapped to [`Value`]s and remembers the
//! order keys were first inserted in. It implements [`Collection`], and adds
//! iteration, indexer sugar (`map["key"]`) and an in-place bulk transform
//! over every leaf value ([`OrderedMap::map`]).
//!
//! # Usage
//!
//! ```
//! use collection::{Collection, OrderedMap, Value};
//!
//! let mut map = OrderedMap::new();
//! map.set("name", "Kaitlen").set("age", 24).add("first").add("second");
//!
//! assert_eq!(map.keys(), vec!["name", "age", "0", "1"]);
//! assert_eq!(map["name"], "Kaitlen");
//! assert!(map["missing"].is_null());
//!
//! for (key, value) in &map {
//!     println!("{key}: {value}");
//! }
//! ```

use std::fmt;

use indexmap::IndexMap;

use crate::{Collection, CollectionError, Comparison, Result, Value, constants};

mod access;
mod merge;
mod transform;

pub use access::{IntoIter, Iter, IterMut};

/// An insertion-ordered map from string keys to [`Value`]s.
///
/// Besides the entries themselves the map tracks the next free positional
/// key used by [`Collection::add`]: one past the largest non-negative
/// integer-like key inserted so far. Removing keys never lowers it; `clear`
/// and `replace` recompute it for the new contents. Once it saturates at
/// `i64::MAX` and that key is taken, `add` stores nothing.
///
/// Equality is strict: two maps are equal when they hold the same keys in the
/// same order with strictly equal values.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(from = "IndexMap<String, Value>")]
pub struct OrderedMap {
    entries: IndexMap<String, Value>,
    next_index: i64,
}

/// Parses keys that are the canonical decimal form of an integer.
///
/// `"0"`, `"42"` and `"-3"` are positional; `"007"`, `"-0"`, `"+1"` and
/// `"1.0"` are ordinary string keys.
fn positional_index(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if (digits.len() > 1 && digits.starts_with('0')) || key == "-0" {
        return None;
    }
    key.parse().ok()
}

impl OrderedMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Gets a mutable reference to the value stored at `key`
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns None if the key is absent or the value has a different type.
    ///
    /// ```
    /// # use collection::{Collection, OrderedMap};
    /// let mut map = OrderedMap::new();
    /// map.set("name", "Kaitlen").set("age", 24);
    ///
    /// assert_eq!(map.get_as::<&str>("name"), Some("Kaitlen"));
    /// assert_eq!(map.get_as::<i64>("age"), Some(24));
    /// assert_eq!(map.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = CollectionError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Removes `key` and returns its value, keeping the order of the remaining entries
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Builds a map from list items keyed `"0"`, `"1"`, ... in order.
    pub(crate) fn from_positional(items: Vec<Value>) -> Self {
        let mut map = OrderedMap::new();
        for item in items {
            map.add(item);
        }
        map
    }

    /// Returns the next key [`Collection::add`] will use
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    /// Inserts while keeping the positional counter ahead of integer-like keys.
    fn insert(&mut self, key: String, value: Value) {
        if let Some(index) = positional_index(&key)
            && index >= self.next_index
        {
            self.next_index = index.saturating_add(1);
        }
        self.entries.insert(key, value);
    }

    /// Loose comparison of two maps: same keys, loosely equal values, any order.
    pub(crate) fn loose_eq(&self, other: &OrderedMap) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|(key, value)| {
                other
                    .entries
                    .get(key)
                    .is_some_and(|theirs| value.loose_eq(theirs))
            })
    }

    /// Returns true if branch values nest more than `limit` levels below this map.
    pub(crate) fn exceeds_depth(&self, limit: usize) -> bool {
        crate::value::children_exceed_depth(self.entries.values(), limit)
    }
}

/// Converts the argument of `merge`/`replace` into a map, rejecting scalars.
///
/// Lists are accepted and keyed by position.
fn into_mapping(operation: &str, data: Value) -> Result<OrderedMap> {
    match data {
        Value::Map(map) => Ok(map),
        Value::List(items) => Ok(OrderedMap::from_positional(items)),
        other => {
            tracing::warn!(
                operation,
                actual = other.type_name(),
                "Rejected non-mapping argument"
            );
            Err(CollectionError::InvalidArgument {
                operation: operation.to_string(),
                expected: constants::MAPPING_EXPECTED.to_string(),
                actual: other.type_name().to_string(),
            }
            .into())
        }
    }
}

impl Collection for OrderedMap {
    fn add(&mut self, value: impl Into<Value>) -> &mut Self {
        let key = self.next_index.to_string();
        // Only reachable once the counter has saturated at i64::MAX
        if self.entries.contains_key(&key) {
            tracing::warn!(key = %key, "Positional key already occupied, value not added");
            return self;
        }
        self.insert(key, value.into());
        self
    }

    fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.insert(key.into(), value.into());
        self
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn remove(&mut self, key: &str) -> &mut Self {
        self.take(key);
        self
    }

    fn all(&self) -> OrderedMap {
        self.clone()
    }

    fn merge(&mut self, data: impl Into<Value>) -> Result<&mut Self> {
        let incoming = into_mapping("merge", data.into())?;
        if incoming.exceeds_depth(constants::MAX_NESTING_DEPTH) {
            tracing::warn!(
                limit = constants::MAX_NESTING_DEPTH,
                "Rejected merge argument nested too deeply"
            );
            return Err(CollectionError::DepthExceeded {
                operation: "merge".to_string(),
                limit: constants::MAX_NESTING_DEPTH,
            }
            .into());
        }
        tracing::trace!(
            existing = self.entries.len(),
            incoming = incoming.entries.len(),
            "Merging entries"
        );
        self.merge_entries(incoming);
        Ok(self)
    }

    fn replace(&mut self, data: impl Into<Value>) -> Result<&mut Self> {
        let incoming = into_mapping("replace", data.into())?;
        tracing::trace!(
            discarded = self.entries.len(),
            adopted = incoming.entries.len(),
            "Replacing entries"
        );
        *self = incoming;
        Ok(self)
    }

    fn clear(&mut self) -> &mut Self {
        tracing::trace!(discarded = self.entries.len(), "Clearing entries");
        self.entries.clear();
        self.next_index = 0;
        self
    }

    fn index_of(&self, value: &Value) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, stored)| *stored == value)
            .map(|(key, _)| key.as_str())
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    fn keys_where(&self, value: &Value, comparison: Comparison) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, stored)| comparison.matches(stored, value))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    fn values(&self) -> Vec<&Value> {
        self.entries.values().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(mine, theirs)| mine == theirs)
    }
}

impl fmt::Display for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl serde::Serialize for OrderedMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl From<IndexMap<String, Value>> for OrderedMap {
    fn from(entries: IndexMap<String, Value>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<OrderedMap> for IndexMap<String, Value> {
    fn from(map: OrderedMap) -> Self {
        map.entries
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key.into(), value.into());
        }
    }
}
