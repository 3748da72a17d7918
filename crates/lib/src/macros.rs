//! Literal construction of ordered maps.

/// Builds an [`OrderedMap`](crate::OrderedMap) from `key => value` pairs.
///
/// Keys accept anything convertible into `String` and values anything
/// convertible into [`Value`](crate::Value), including nested maps built with
/// the macro itself. Entries keep the order they are written in.
///
/// # Examples
///
/// ```
/// use collection::{Collection, collection};
///
/// let person = collection! {
///     "name" => "Kaitlen",
///     "age" => 24,
///     "address" => collection! { "country" => "Australia" },
/// };
///
/// assert_eq!(person.keys(), vec!["name", "age", "address"]);
/// assert!(collection!().is_empty());
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::OrderedMap::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::OrderedMap::new();
        $(
            <$crate::OrderedMap as $crate::Collection>::set(&mut map, $key, $value);
        )+
        map
    }};
}
