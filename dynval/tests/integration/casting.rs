//! Typed extraction.

use dynval::{FromValue, Value, ValueError, ValueType, cast, value};
use dynval_testhelpers::{IPanic, setup};

fn round_trip<T>(input: T) -> T
where
    T: FromValue + Into<Value> + Copy,
{
    cast::<T>(&input.into()).unwrap()
}

#[test]
fn every_primitive_round_trips() {
    setup();

    assert!(round_trip(true));
    assert!(!round_trip(false));
    assert_eq!(round_trip(u8::MAX), u8::MAX);
    assert_eq!(round_trip(u16::MAX), u16::MAX);
    assert_eq!(round_trip(u32::MAX), u32::MAX);
    assert_eq!(round_trip(u64::MAX), u64::MAX);
    assert_eq!(round_trip(usize::MAX), usize::MAX);
    assert_eq!(round_trip(i8::MIN), i8::MIN);
    assert_eq!(round_trip(i16::MIN), i16::MIN);
    assert_eq!(round_trip(i32::MIN), i32::MIN);
    assert_eq!(round_trip(i64::MIN), i64::MIN);
    assert_eq!(round_trip(isize::MIN), isize::MIN);
    assert_eq!(round_trip(1.25f32), 1.25);
    assert_eq!(round_trip(-1e300f64), -1e300);
    assert_eq!(
        cast::<String>(&Value::from("héllo")).unwrap(),
        "héllo"
    );
}

#[test]
fn numeric_text_is_parsed() -> Result<(), IPanic> {
    setup();

    assert_eq!(cast::<u32>(&value!("4096"))?, 4096);
    assert_eq!(cast::<i64>(&value!("-12"))?, -12);
    assert_eq!(cast::<f64>(&value!("6.02e23"))?, 6.02e23);
    assert_eq!(cast::<i32>(&value!("3.99"))?, 3);
    Ok(())
}

#[test]
fn numbers_convert_across_categories() -> Result<(), IPanic> {
    setup();

    assert_eq!(cast::<f64>(&value!(3u8))?, 3.0);
    assert_eq!(cast::<u64>(&value!(-1))?, u64::MAX);
    assert_eq!(cast::<i16>(&value!(-2.7))?, -2);
    assert_eq!(cast::<String>(&value!(-2.5))?, "-2.5");
    assert_eq!(cast::<String>(&value!(10u64))?, "10");
    Ok(())
}

#[test]
fn bad_casts() {
    setup();

    let err = cast::<i32>(&Value::from("not-a-number")).unwrap_err();
    assert_eq!(
        err,
        ValueError::BadCast {
            from: ValueType::String,
            to: "i32",
        }
    );
    assert_eq!(err.to_string(), "can't convert from `string` to `i32`");

    assert!(cast::<f64>(&Value::NULL).unwrap_err().is_bad_cast());
    assert!(cast::<u8>(&value!([1])).unwrap_err().is_bad_cast());
    assert!(cast::<String>(&value!({"k": 1})).unwrap_err().is_bad_cast());
    assert!(value!({}).cast::<bool>().unwrap_err().is_bad_cast());
}

#[test]
fn errors_work_with_question_mark() {
    setup();

    fn sum(doc: &Value) -> Result<i64, Box<dyn std::error::Error>> {
        Ok(doc["a"].cast::<i64>()? + doc["b"].cast::<i64>()?)
    }

    assert_eq!(sum(&value!({"a": 1, "b": "2"})).unwrap(), 3);
    let err = sum(&value!({"a": 1, "b": [2]})).unwrap_err();
    assert_eq!(err.to_string(), "can't convert from `array` to `i64`");
}
