//! Key/value extraction and value searches.

use collection::{Collection, Comparison, OrderedMap, Value, collection};

use crate::helpers::*;

#[test]
fn test_keys_in_insertion_order() {
    assert_eq!(profile().keys(), vec!["name", "age", "country"]);
}

#[test]
fn test_values_in_insertion_order() {
    let map = profile();

    assert_eq!(
        map.values(),
        vec![&Value::from("Kaitlen"), &Value::from(24), &Value::from("Australia")]
    );
}

#[test]
fn test_keys_and_values_of_empty_map() {
    let map = OrderedMap::new();

    assert!(map.keys().is_empty());
    assert!(map.values().is_empty());
}

#[test]
fn test_index_of_returns_first_match() {
    let map = collection! { "a" => "x", "b" => "y", "c" => "x" };

    assert_eq!(map.index_of(&Value::from("x")), Some("a"));
    assert_eq!(map.index_of(&Value::from("y")), Some("b"));
    assert_eq!(map.index_of(&Value::from("z")), None);
}

#[test]
fn test_index_of_is_strict() {
    let map = collection! { "off" => false, "empty" => "", "nothing" => Value::Null, "float" => 0.0 };

    assert_eq!(map.index_of(&Value::from(0)), None);
    assert_eq!(map.index_of(&Value::from("0")), None);
    assert_eq!(map.index_of(&Value::from(false)), Some("off"));
    assert_eq!(map.index_of(&Value::from(0.0)), Some("float"));
}

#[test]
fn test_index_of_nested_values() {
    let map = collection! {
        "first" => collection! { "a" => 1, "b" => 2 },
        "second" => collection! { "b" => 2, "a" => 1 },
    };

    // Strict map equality includes key order
    let probe = Value::from(collection! { "b" => 2, "a" => 1 });
    assert_eq!(map.index_of(&probe), Some("second"));
}

#[test]
fn test_has_key_tests_value_membership() {
    let map = profile();

    assert!(map.has_key(&Value::from("Kaitlen")));
    assert!(map.has_key(&Value::from(24)));
    assert!(!map.has_key(&Value::from("name")));
    assert!(!map.has_key(&Value::from("24")));
}

#[test]
fn test_has_key_match_at_first_position() {
    let mut map = OrderedMap::new();
    map.add("x");

    assert_eq!(map.index_of(&Value::from("x")), Some("0"));
    assert!(map.has_key(&Value::from("x")));
    assert!(map.contains_value(&Value::from("x")));
}

#[test]
fn test_has_key_on_empty_map() {
    assert!(!OrderedMap::new().has_key(&Value::Null));
}

#[test]
fn test_keys_where_strict() {
    let map = collection! {
        "int" => 1,
        "text" => "1",
        "flag" => true,
        "float" => 1.0,
        "other" => 2,
    };

    assert_eq!(map.keys_where(&Value::from(1), Comparison::Strict), vec!["int"]);
}

#[test]
fn test_keys_where_loose() {
    let map = collection! {
        "int" => 1,
        "text" => "1",
        "flag" => true,
        "float" => 1.0,
        "other" => 2,
    };

    assert_eq!(
        map.keys_where(&Value::from(1), Comparison::Loose),
        vec!["int", "text", "flag", "float"]
    );
}

#[test]
fn test_keys_where_defaults_to_strict() {
    let map = collection! { "a" => "", "b" => Value::Null };

    assert_eq!(map.keys_where(&Value::Null, Comparison::default()), vec!["b"]);
    assert_eq!(map.keys_where(&Value::Null, Comparison::Loose), vec!["a", "b"]);
}
