#![cfg(feature = "serde")]

use lite_nbt::{CompoundValue, ListValue, TagID, TagValue};
use serde::{Deserialize, Serialize};

#[test]
fn test_serialize_to_json() {
    let mut compound = CompoundValue::new();
    compound.insert("byte", 1i8);
    compound.insert("float", 1.5f32);
    compound.insert("ints", [1i32, 2]);
    compound.insert("list", ListValue::from_iter([String::from("a")]));
    compound.insert("name", "Steve");
    compound.insert("nothing", ());
    let json = serde_json::to_string(&TagValue::from(compound)).unwrap();
    assert_eq!(
        json,
        r#"{"byte":1,"float":1.5,"ints":[1,2],"list":["a"],"name":"Steve","nothing":null}"#
    );
}

#[test]
fn test_deserialize_from_json() {
    let value: TagValue = serde_json::from_str(
        r#"{"name": "Steve", "pos": [1.5, 2.0], "flags": [true, false], "n": -3, "big": 5, "none": null}"#,
    )
    .unwrap();
    assert_eq!(value.get_as::<String>("name").unwrap(), "Steve");
    let pos = value.get_as::<ListValue>("pos").unwrap();
    assert_eq!(pos.element_id(), TagID::Double);
    let flags = value.get_as::<ListValue>("flags").unwrap();
    assert_eq!(flags.as_slice(), [TagValue::Byte(1), TagValue::Byte(0)]);
    assert_eq!(value.get_at("n").unwrap(), &TagValue::Long(-3));
    assert_eq!(value.get_at("big").unwrap(), &TagValue::Long(5));
    assert_eq!(value.get_at("none").unwrap(), &TagValue::End);
}

#[test]
fn test_heterogeneous_sequence_is_rejected() {
    assert!(serde_json::from_str::<TagValue>(r#"[1, "a"]"#).is_err());
    assert!(serde_json::from_str::<TagValue>(r#"[1, 2.5]"#).is_err());
    assert!(serde_json::from_str::<TagValue>(r#"[18446744073709551615]"#).is_err());
}

#[test]
fn test_container_types() {
    let list: ListValue = serde_json::from_str("[[1], []]").unwrap();
    assert_eq!(list.element_id(), TagID::List);
    assert!(serde_json::from_str::<ListValue>("{}").is_err());

    let compound: CompoundValue = serde_json::from_str(r#"{"a": {"b": "c"}}"#).unwrap();
    assert_eq!(compound.get_at("a").unwrap().get_as::<String>("b").unwrap(), "c");
    assert!(serde_json::from_str::<CompoundValue>("[1]").is_err());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Save {
    version: i64,
    player: CompoundValue,
}

#[test]
fn test_derived_struct_round_trip() {
    let mut player = CompoundValue::new();
    player.insert("Name", "Alex");
    player.insert("Health", 19.5f64);
    player.insert("Pos", ListValue::from_iter([1i64, 64, -7]));
    let save = Save {
        version: 3465,
        player,
    };

    let json = serde_json::to_string(&save).unwrap();
    let back: Save = serde_json::from_str(&json).unwrap();
    assert_eq!(back, save);
}
