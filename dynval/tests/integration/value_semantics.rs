//! Construction, copying and moving.

use dynval::{DestructuredRef, VArray, VObject, Value, ValueType, value};
use dynval_testhelpers::setup;
use std::collections::BTreeMap;

#[test]
fn every_primitive_picks_its_category() {
    setup();

    let cases = [
        (Value::NULL, ValueType::Null),
        (Value::from(()), ValueType::Null),
        (Value::from(true), ValueType::Unsigned),
        (Value::from(7u8), ValueType::Unsigned),
        (Value::from(7u16), ValueType::Unsigned),
        (Value::from(7u32), ValueType::Unsigned),
        (Value::from(7u64), ValueType::Unsigned),
        (Value::from(7usize), ValueType::Unsigned),
        (Value::from(-7i8), ValueType::Signed),
        (Value::from(-7i16), ValueType::Signed),
        (Value::from(-7i32), ValueType::Signed),
        (Value::from(-7i64), ValueType::Signed),
        (Value::from(-7isize), ValueType::Signed),
        (Value::from('z'), ValueType::Signed),
        (Value::from(0.5f32), ValueType::Double),
        (Value::from(0.5f64), ValueType::Double),
        (Value::from("text"), ValueType::String),
        (Value::from(String::from("text")), ValueType::String),
        (Value::from(vec![1, 2]), ValueType::Array),
        (Value::from(BTreeMap::from([("k", 1)])), ValueType::Object),
    ];

    for (value, expected) in cases {
        assert_eq!(value.value_type(), expected, "{value:?}");
    }
}

#[test]
fn copies_are_independent() {
    setup();

    let original = value!({"list": [1, 2], "name": "a"});
    let mut copy = original.clone();
    copy["list"][5] = Value::from("added");
    copy["name"] = Value::from("b");

    assert_eq!(original, value!({"list": [1, 2], "name": "a"}));
    assert_eq!(copy["list"].len(), Some(6));
    assert_eq!(copy["name"], Value::from("b"));
    assert_ne!(original, copy);
}

#[test]
fn moves_transfer_the_payload() {
    setup();

    let source = value!(["payload"]);
    let destination = source;
    assert_eq!(destination[0], Value::from("payload"));

    let mut slot = value!({"k": [1, 2, 3]});
    let taken = slot["k"].take();
    assert_eq!(taken.len(), Some(3));
    assert!(slot["k"].is_null());

    let reinitialized = {
        slot = Value::from(5);
        slot
    };
    assert_eq!(reinitialized, Value::from(5));
}

#[test]
fn collecting_builds_containers() {
    setup();

    let array: Value = (1..=3).collect();
    assert_eq!(array, value!([1, 2, 3]));

    let object: Value = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(object, value!({"a": 1, "b": 2}));

    let via_ctor = Value::object([("x", Value::array(["y"]))]);
    assert_eq!(via_ctor, value!({"x": ["y"]}));
}

#[test]
fn option_maps_none_to_null() {
    setup();

    assert!(Value::from(None::<&str>).is_null());
    assert_eq!(Value::from(Some("s")), Value::from("s"));
}

#[test]
fn containers_can_be_edited_directly() {
    setup();

    let mut doc = value!({"items": []});
    let items: &mut VArray = doc["items"].as_array_mut().unwrap();
    items.push(1);
    items.push("two");
    assert_eq!(doc["items"], value!([1, "two"]));

    let obj: &mut VObject = doc.as_object_mut().unwrap();
    obj.insert("count", 2);
    assert!(obj.contains_key("count"));
    assert_eq!(obj.remove("items").map(|v| v.len()), Some(Some(2)));

    assert_eq!(doc, value!({"count": 2}));
}

#[test]
fn destructuring() {
    setup();

    let doc = value!([null, 1, -1, 1.5, "s", [], {}]);
    let kinds: Vec<&str> = doc
        .as_array()
        .unwrap()
        .iter()
        .map(|v| match v.destructure_ref() {
            DestructuredRef::Null => "null",
            DestructuredRef::Unsigned(_) => "unsigned",
            DestructuredRef::Signed(_) => "signed",
            DestructuredRef::Double(_) => "double",
            DestructuredRef::String(_) => "string",
            DestructuredRef::Array(_) => "array",
            DestructuredRef::Object(_) => "object",
        })
        .collect();

    assert_eq!(
        kinds,
        ["null", "signed", "signed", "double", "string", "array", "object"]
    );
}

#[test]
fn value_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
