//! In-place transformation of every leaf value.

use super::OrderedMap;
use crate::{CollectionError, Result, Value, constants};

impl OrderedMap {
    /// Applies `f` to every leaf value, recursing into nested maps and lists.
    ///
    /// The closure receives a mutable reference to the leaf and the key it is
    /// stored under (list elements receive their position) and may overwrite
    /// the leaf in place. A leaf replaced with a map or list is not walked
    /// again. Extra context is captured by the closure.
    ///
    /// Fails with [`CollectionError::DepthExceeded`] without touching any
    /// value when the map nests deeper than
    /// [`MAX_NESTING_DEPTH`](crate::constants::MAX_NESTING_DEPTH).
    ///
    /// ```
    /// # use collection::{Collection, OrderedMap, Value};
    /// let mut numbers = OrderedMap::new();
    /// numbers.replace(vec![1, 2, 3, 4, 5])?;
    ///
    /// numbers.map(|value, _key| {
    ///     if let Value::Int(n) = value {
    ///         *n = n.pow(3);
    ///     }
    /// })?;
    ///
    /// assert_eq!(numbers.values(), vec![&1, &8, &27, &64, &125]);
    /// # Ok::<(), collection::Error>(())
    /// ```
    pub fn map<F>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&mut Value, &str),
    {
        if self.exceeds_depth(constants::MAX_NESTING_DEPTH) {
            tracing::warn!(
                limit = constants::MAX_NESTING_DEPTH,
                "Refusing to transform deeply nested map"
            );
            return Err(CollectionError::DepthExceeded {
                operation: "map".to_string(),
                limit: constants::MAX_NESTING_DEPTH,
            }
            .into());
        }

        tracing::trace!(entries = self.entries.len(), "Transforming leaf values");
        walk_entries(self, &mut f);
        Ok(self)
    }
}

fn walk_entries<F>(map: &mut OrderedMap, f: &mut F)
where
    F: FnMut(&mut Value, &str),
{
    for (key, value) in map.entries.iter_mut() {
        walk_value(value, key, f);
    }
}

fn walk_value<F>(value: &mut Value, key: &str, f: &mut F)
where
    F: FnMut(&mut Value, &str),
{
    match value {
        Value::Map(map) => walk_entries(map, f),
        Value::List(items) => {
            for (position, item) in items.iter_mut().enumerate() {
                walk_value(item, &position.to_string(), f);
            }
        }
        leaf => f(leaf, key),
    }
}
