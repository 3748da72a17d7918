//! Indexer sugar and iteration.
//!
//! `map["key"]` must behave exactly like the `get`/`set` primitives it
//! forwards to.

use collection::{Collection, OrderedMap, Value, collection};

use crate::helpers::*;

#[test]
fn test_index_reads_like_get() {
    let map = person();

    assert_eq!(map["name"], "Kaitlen");
    assert_eq!(&map["name"], map.get_or("name", &Value::Null));
}

#[test]
fn test_index_missing_key_reads_null() {
    let map = person();

    assert!(map["age"].is_null());
    assert_eq!(&map["age"], map.get_or("age", &Value::Null));
    // Reading never inserts
    assert!(!map.exists("age"));
}

#[test]
fn test_index_assignment_sets() {
    let mut via_index = OrderedMap::new();
    via_index["name"] = Value::from("Kaitlen");

    let mut via_set = OrderedMap::new();
    via_set.set("name", "Kaitlen");

    assert_eq!(via_index, via_set);
    assert!(via_index.exists("name"));
}

#[test]
fn test_index_assignment_overwrites_in_place() {
    let mut map = profile();
    map["name"] = Value::from("Nathan");

    assert_keys(&map, &["name", "age", "country"]);
    assert_text(&map, &[("name", "Nathan")]);
}

#[test]
fn test_index_mutation_of_nested_value() {
    let mut map = collection! { "address" => collection! { "country" => "Australia" } };

    if let Some(address) = map["address"].as_map_mut() {
        address["state"] = Value::from("Queensland");
    }

    assert_eq!(
        map,
        with_address(&[("country", "Australia"), ("state", "Queensland")])
    );
}

#[test]
fn test_iteration_yields_entries_in_order() {
    let map = person();

    let entries: Vec<(&String, &Value)> = map.iter().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, "name");
    assert_eq!(entries[0].1, "Kaitlen");
}

#[test]
fn test_iteration_is_restartable() {
    let map = profile();

    let first: Vec<_> = (&map).into_iter().map(|(k, _)| k.clone()).collect();
    let second: Vec<_> = (&map).into_iter().map(|(k, _)| k.clone()).collect();

    assert_eq!(first, vec!["name", "age", "country"]);
    assert_eq!(first, second);
}

#[test]
fn test_for_loop_over_reference() {
    let map = profile();
    let mut seen = Vec::new();

    for (key, value) in &map {
        seen.push(format!("{key}={value}"));
    }

    assert_eq!(seen, vec!["name=Kaitlen", "age=24", "country=Australia"]);
}

#[test]
fn test_mutable_iteration() {
    let mut map = collection! { "a" => 1, "b" => 2 };

    for (_, value) in &mut map {
        if let Value::Int(n) = value {
            *n *= 10;
        }
    }

    assert_eq!(map, collection! { "a" => 10, "b" => 20 });
}

#[test]
fn test_owned_iteration() {
    let pairs: Vec<(String, Value)> = person().into_iter().collect();

    assert_eq!(pairs, vec![("name".to_string(), Value::from("Kaitlen"))]);
}

#[test]
fn test_extend_and_collect() {
    let mut map: OrderedMap = vec![("a", 1), ("b", 2)].into_iter().collect();
    map.extend(vec![("c", 3), ("a", 100)]);

    assert_keys(&map, &["a", "b", "c"]);
    assert_eq!(map["a"], 100);
}

#[test]
fn test_display() {
    let map = collection! {
        "name" => "Kaitlen",
        "tags" => vec!["a", "b"],
        "address" => collection! { "country" => "Australia" },
    };

    assert_eq!(
        map.to_string(),
        "{name: Kaitlen, tags: [a, b], address: {country: Australia}}"
    );
}
