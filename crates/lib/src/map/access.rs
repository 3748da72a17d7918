//! Iteration and indexer access for [`OrderedMap`].
//!
//! Indexing forwards to the [`Collection`] primitives: `map["key"]` reads
//! through [`Collection::get_or`] with a `Null` default, and `map["key"] = v`
//! goes through [`Collection::set`] before handing out the slot.

use std::ops::{Index, IndexMut};

use super::OrderedMap;
use crate::{Collection, Value};

/// Borrowing iterator over the entries of an [`OrderedMap`], in insertion order.
pub type Iter<'a> = indexmap::map::Iter<'a, String, Value>;

/// Mutable iterator over the entries of an [`OrderedMap`], in insertion order.
pub type IterMut<'a> = indexmap::map::IterMut<'a, String, Value>;

/// Owning iterator over the entries of an [`OrderedMap`], in insertion order.
pub type IntoIter = indexmap::map::IntoIter<String, Value>;

static NULL: Value = Value::Null;

impl OrderedMap {
    /// Returns an iterator over all entries in insertion order.
    ///
    /// Every call starts a fresh pass from the first entry.
    pub fn iter(&self) -> Iter<'_> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all entries in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        self.entries.iter_mut()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut OrderedMap {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for OrderedMap {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Index<&str> for OrderedMap {
    type Output = Value;

    /// Returns the stored value, or `Null` when the key is absent.
    fn index(&self, key: &str) -> &Value {
        self.get_or(key, &NULL)
    }
}

impl IndexMut<&str> for OrderedMap {
    /// Returns the slot for `key`, inserting `Null` first when the key is absent.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        if !self.exists(key) {
            self.set(key, Value::Null);
        }
        self.get_mut(key).expect("Key should exist after insert")
    }
}
