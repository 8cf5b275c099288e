//! Read and write indexing, auto-vivification and index failures.

use dynval::{IndexTarget, VArray, VObject, Value, ValueError, ValueType, cast, value};
use dynval_testhelpers::{IPanic, setup};

#[test]
fn nested_object_writes_create_every_level() -> Result<(), IPanic> {
    setup();

    let mut o = VObject::new().into_value();
    o["a"]["b"] = Value::from(1);

    assert!(o["a"].is_object());
    assert_eq!(cast::<i32>(&o["a"]["b"])?, 1);
    assert_eq!(o, value!({"a": {"b": 1}}));
    Ok(())
}

#[test]
fn mixed_nested_writes() {
    setup();

    let mut doc = VObject::new().into_value();
    doc["rows"][1]["id"] = Value::from(7u32);

    assert!(doc["rows"].is_array());
    assert!(doc["rows"][0].is_null());
    assert_eq!(doc["rows"][1], value!({"id": 7u32}));
}

#[test]
fn array_writes_grow_and_fill_with_null() {
    setup();

    let mut a = VArray::new().into_value();
    a[3] = Value::from("x");

    assert_eq!(a.len(), Some(4));
    for pos in 0..3 {
        assert!(a[pos].is_null(), "slot {pos}");
    }
    assert_eq!(a[3], Value::from("x"));

    a[1] = Value::from(true);
    assert_eq!(a.len(), Some(4));
}

#[test]
fn reads_never_modify() -> Result<(), IPanic> {
    setup();

    let doc = value!({"present": [1]});
    let snapshot = doc.clone();

    assert!(doc.get("absent")?.is_null());
    assert!(doc.get(99)?.is_null());
    assert!(doc["present"].get(10)?.is_null());
    assert!(doc["present"].get("3")?.is_null());

    assert_eq!(doc, snapshot);
    Ok(())
}

#[test]
fn read_miss_is_a_fresh_null_each_time() -> Result<(), IPanic> {
    setup();

    let doc = value!({});
    let mut miss = doc.get("x")?.into_owned();
    assert!(miss.is_null());
    miss = Value::from("changed");
    assert_eq!(miss, Value::from("changed"));
    assert!(doc.get("x")?.is_null());
    Ok(())
}

#[test]
fn positions_on_objects_use_decimal_keys() {
    setup();

    let mut doc = value!({});
    doc[0] = Value::from("zero");
    doc[10] = Value::from("ten");

    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["0", "10"]);
    assert_eq!(doc["10"], Value::from("ten"));
}

#[test]
fn numeric_keys_on_arrays() {
    setup();

    let mut doc = value!(["a", "b"]);
    assert_eq!(doc["1"], Value::from("b"));
    doc["3"] = Value::from("d");
    assert_eq!(doc.len(), Some(4));

    let err = doc.get("first").unwrap_err();
    assert_eq!(
        err,
        ValueError::BadIndex {
            on: ValueType::Array,
            index: IndexTarget::Key("first".into()),
        }
    );
    assert!(doc.get_mut("-1").unwrap_err().is_bad_index());
    assert_eq!(doc.len(), Some(4));
}

#[test]
fn scalars_strings_and_null_reject_indexing() {
    setup();

    let mut number = Value::from(42);
    let err = number.get("x").unwrap_err();
    assert!(err.is_bad_index());
    assert_eq!(err.to_string(), r#"can't index `signed` with ["x"]"#);
    assert!(number.get_mut(0).unwrap_err().is_bad_index());
    assert_eq!(number, Value::from(42));

    let mut text = Value::from("abc");
    assert!(text.get(0).unwrap_err().is_bad_index());
    assert!(text.get_mut("k").unwrap_err().is_bad_index());
    assert_eq!(text, Value::from("abc"));

    let mut null = Value::NULL;
    assert!(null.get("k").unwrap_err().is_bad_index());
    assert!(null.get_mut("k").unwrap_err().is_bad_index());
    assert!(null.is_null());
}

#[test]
fn explicit_null_entries_are_not_vivified() {
    setup();

    let mut doc = value!({"slot": null});
    let err = doc["slot"].get_mut("inner").unwrap_err();
    assert_eq!(
        err,
        ValueError::BadIndex {
            on: ValueType::Null,
            index: IndexTarget::Key("inner".into()),
        }
    );
}

#[test]
#[should_panic(expected = "can't index `signed` with [\"x\"]")]
fn index_operator_panics_on_scalar() {
    let v = Value::from(42);
    let _ = &v["x"];
}

#[test]
#[should_panic(expected = "no entry at [2]")]
fn index_operator_panics_on_miss() {
    let v = value!([1]);
    let _ = &v[2];
}

#[test]
fn positions_past_addressable_memory_fail_cleanly() {
    setup();

    let mut a = Value::array([1, 2]);
    let err = a.get_mut(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        ValueError::BadIndex {
            on: ValueType::Array,
            index: IndexTarget::Position(usize::MAX),
        }
    );
    assert!(a.get_mut("18446744073709551615").unwrap_err().is_bad_index());
    assert_eq!(a, value!([1, 2]));
}

#[test]
fn cloned_placeholders_are_plain_nulls() {
    setup();

    let mut o = value!({});
    o.get_mut("pending").unwrap();

    let mut copy = o["pending"].clone();
    assert!(copy.get_mut("x").unwrap_err().is_bad_index());
    assert!(copy.is_null());

    // The original placeholder still vivifies.
    o["pending"]["x"] = Value::from(1);
    assert_eq!(o, value!({"pending": {"x": 1}}));
}
