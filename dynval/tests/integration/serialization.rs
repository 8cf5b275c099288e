//! Pretty-printed output.

use dynval::{SerializeOptions, Value, escape, value};
use dynval_testhelpers::setup;
use insta::assert_snapshot;

fn sample() -> Value {
    value!({
        "name": "dynval",
        "version": 1,
        "ratio": 0.75,
        "offset": -3,
        "tags": ["cell", "variant"],
        "owner": {"id": 7, "active": true, "email": null},
        "empty_list": [],
        "empty_map": {}
    })
}

#[test]
fn document_with_defaults() {
    setup();

    assert_snapshot!(sample().serialize(2, 0), @r#"
    {
      "empty_list": [],
      "empty_map": {},
      "name": "dynval",
      "offset": -3,
      "owner": {
        "active": 1,
        "email": null,
        "id": 7
      },
      "ratio": 0.75,
      "tags": [
        "cell",
        "variant"
      ],
      "version": 1
    }
    "#);
}

#[test]
fn wider_indent_and_starting_depth() {
    setup();

    let doc = value!({"k": [1, {"x": "y"}]});
    assert_snapshot!(doc.serialize(4, 0), @r#"
    {
        "k": [
            1,
            {
                "x": "y"
            }
        ]
    }
    "#);

    // Entries are indented for the given depth; the opening bracket is not.
    assert_eq!(
        value!([1]).serialize(2, 2),
        "[\n      1\n    ]"
    );
}

#[test]
fn zero_indent() {
    setup();

    assert_eq!(value!({"a": [1, 2]}).serialize(0, 0), "{\n\"a\": [\n1,\n2\n]\n}");
}

#[test]
fn scalars_print_their_text() {
    setup();

    assert_eq!(Value::NULL.serialize(2, 0), "null");
    assert_eq!(Value::from(u64::MAX).serialize(2, 0), "18446744073709551615");
    assert_eq!(Value::from(i64::MIN).serialize(2, 0), "-9223372036854775808");
    assert_eq!(Value::from(1.5e-7).serialize(2, 0), "0.00000015");
    assert_eq!(Value::from(false).serialize(2, 5), "0");
}

#[test]
fn strings_are_escaped() {
    setup();

    assert_eq!(Value::from("a\"b\\c\n").serialize(2, 0), r#""a\"b\\c\n""#);
    assert_eq!(Value::from("it's").serialize(2, 0), r#""it\'s""#);
    assert_eq!(
        Value::from("\t\r\x07\x08\x0b\x0c").serialize(2, 0),
        r#""\t\r\a\b\v\f""#
    );
    assert_eq!(Value::from("\x01\x7f").serialize(2, 0), r#""\1\127""#);
    assert_eq!(Value::from("é").serialize(2, 0), r#""\195\169""#);
    assert_eq!(escape::quote("plain"), "\"plain\"");
}

#[test]
fn display_uses_default_options() {
    setup();

    let doc = sample();
    assert_eq!(doc.to_string(), doc.serialize(2, 0));
    assert_eq!(
        format!("{}", doc.pretty(SerializeOptions::new().indent_width(4))),
        doc.serialize(4, 0)
    );
}

#[test]
fn simple_documents_are_valid_json() {
    setup();

    let text = sample().serialize(2, 0);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        parsed,
        serde_json::json!({
            "name": "dynval",
            "version": 1,
            "ratio": 0.75,
            "offset": -3,
            "tags": ["cell", "variant"],
            "owner": {"id": 7, "active": 1, "email": null},
            "empty_list": [],
            "empty_map": {}
        })
    );
}
