//! Deep merge of one map into another.
//!
//! Merging walks the incoming entries in order. Keys missing from the target
//! are appended and branch values meeting branch values are merged
//! recursively. A list takes part in a merge as a mapping keyed by position,
//! the same model used for a list passed to `merge` itself:
//!
//! - map into map: per key, recursively
//! - list into list: per position, extra incoming items appended
//! - list into map: items merged under the keys `"0"`, `"1"`, ...
//! - map into list: the list becomes a positional map first, then map into map
//!
//! Any pairing involving a leaf is resolved in favour of the incoming value,
//! which takes over the existing key's slot.
//!
//! Recursion only descends where both sides are branch values, so its depth
//! is bounded by the nesting of the incoming data. That nesting is checked
//! against [`MAX_NESTING_DEPTH`](crate::constants::MAX_NESTING_DEPTH) before
//! any entry is touched.

use super::OrderedMap;
use crate::Value;

impl OrderedMap {
    /// Merges `incoming` into this map. The caller validates nesting depth.
    pub(super) fn merge_entries(&mut self, incoming: OrderedMap) {
        for (key, value) in incoming.entries {
            match self.entries.get_mut(&key) {
                Some(existing) => merge_value(existing, value),
                None => self.insert(key, value),
            }
        }
    }
}

fn merge_value(existing: &mut Value, incoming: Value) {
    if matches!(incoming, Value::Map(_))
        && let Value::List(items) = &mut *existing
    {
        *existing = Value::Map(OrderedMap::from_positional(std::mem::take(items)));
    }

    match (existing, incoming) {
        (Value::Map(current), Value::Map(other)) => current.merge_entries(other),
        (Value::List(current), Value::List(other)) => merge_lists(current, other),
        (Value::Map(current), Value::List(other)) => {
            current.merge_entries(OrderedMap::from_positional(other))
        }
        (slot, other) => *slot = other,
    }
}

fn merge_lists(current: &mut Vec<Value>, incoming: Vec<Value>) {
    for (position, item) in incoming.into_iter().enumerate() {
        match current.get_mut(position) {
            Some(existing) => merge_value(existing, item),
            None => current.push(item),
        }
    }
}
