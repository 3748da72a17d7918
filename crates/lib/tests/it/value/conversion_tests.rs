//! Conversions into and out of Value, including JSON interop.

use collection::{Collection, CollectionError, OrderedMap, Value, collection};

use crate::helpers::*;

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(7i64), Value::Int(7));
    assert_eq!(Value::from(7u32), Value::Int(7));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from("text"), Value::Text("text".to_string()));
    assert_eq!(Value::from(String::from("owned")), Value::Text("owned".to_string()));
}

#[test]
fn test_from_option() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn test_from_nested_collections() {
    let value = Value::from(vec![vec![1, 2], vec![3]]);

    let outer = value.as_list().unwrap();
    assert_eq!(outer.len(), 2);
    assert_eq!(outer[0], Value::from(vec![1, 2]));
    assert_eq!(Value::from(person()).as_map(), Some(&person()));
}

#[test]
fn test_try_from_matching_types() -> Result<(), CollectionError> {
    assert!(bool::try_from(&Value::from(true))?);
    assert_eq!(i64::try_from(&Value::from(3))?, 3);
    assert_eq!(f64::try_from(&Value::from(0.25))?, 0.25);
    assert_eq!(String::try_from(&Value::from("s"))?, "s");
    assert_eq!(<&str>::try_from(&Value::from("s"))?, "s");
    assert_eq!(OrderedMap::try_from(&Value::from(person()))?, person());
    Ok(())
}

#[test]
fn test_try_from_mismatch_reports_types() {
    let err = i64::try_from(&Value::from("3")).unwrap_err();

    assert!(err.is_type_error());
    assert!(matches!(
        &err,
        CollectionError::TypeMismatch { expected, actual } if expected == "int" && actual == "text"
    ));
    assert_eq!(err.to_string(), "Type mismatch: expected int, found text");

    // Integers are not silently widened to floats
    assert!(f64::try_from(&Value::from(3)).is_err());
}

#[test]
fn test_get_as() {
    let map = collection! {
        "name" => "Kaitlen",
        "age" => 24,
        "active" => true,
        "address" => collection! { "country" => "Australia" },
    };

    assert_eq!(map.get_as::<String>("name").as_deref(), Some("Kaitlen"));
    assert_eq!(map.get_as::<i64>("age"), Some(24));
    assert_eq!(map.get_as::<bool>("active"), Some(true));
    assert_eq!(
        map.get_as::<OrderedMap>("address"),
        Some(collection! { "country" => "Australia" })
    );
    assert_eq!(map.get_as::<bool>("age"), None);
    assert_eq!(map.get_as::<i64>("missing"), None);
}

#[test]
fn test_from_json_keeps_key_order() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"zeta": 1, "alpha": [true, null, 2.5], "mid": {"b": "x", "a": "y"}}"#)
            .unwrap();

    let value = Value::from(json);
    let map = value.as_map().unwrap();

    assert_keys(map, &["zeta", "alpha", "mid"]);
    assert_eq!(map["zeta"], 1);
    assert_eq!(
        map["alpha"],
        Value::from(vec![Value::Bool(true), Value::Null, Value::Float(2.5)])
    );
    assert_keys(map["mid"].as_map().unwrap(), &["b", "a"]);
}

#[test]
fn test_json_round_trip() {
    let mut map = profile();
    map.add("positional")
        .set("tags", vec!["a", "b"])
        .set("address", collection! { "country" => "Australia", "postcode" => Value::Null });

    let encoded = serde_json::to_string(&map).unwrap();
    assert!(encoded.starts_with(r#"{"name":"Kaitlen","age":24,"country":"Australia","0":"positional""#));

    let decoded: OrderedMap = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, map);
    assert_eq!(decoded.next_index(), 1);
}
