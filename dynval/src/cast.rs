//! Typed extraction from values.

use alloc::string::String;

use crate::Value;
use crate::error::Result;

/// A type that can be extracted from a [`Value`] with [`cast`].
///
/// Each target reads one of the four coercion categories: unsigned integers
/// and `bool` go through [`Value::as_unsigned`], signed integers through
/// [`Value::as_signed`], floats through [`Value::as_double`] and `String`
/// through [`Value::as_text`]. Narrowing to a smaller width is an unchecked
/// `as` cast.
pub trait FromValue: Sized {
    /// Name reported as the target of a failed cast.
    const NAME: &'static str;

    /// Extracts `Self` from `value`.
    fn from_value(value: &Value) -> Result<Self>;
}

/// Extracts a `T` from `value`.
///
/// ```
/// use dynval::{Value, cast};
///
/// assert_eq!(cast::<i32>(&Value::from("12")).unwrap(), 12);
/// assert_eq!(cast::<u8>(&Value::from(300)).unwrap(), 44);
/// assert!(cast::<i32>(&Value::from("not-a-number")).is_err());
/// ```
pub fn cast<T: FromValue>(value: &Value) -> Result<T> {
    T::from_value(value).map_err(|err| err.retarget(T::NAME))
}

impl Value {
    /// Method form of [`cast`].
    pub fn cast<T: FromValue>(&self) -> Result<T> {
        cast(self)
    }
}

macro_rules! impl_from_value {
    ($via:ident: $($t:ty),* $(,)?) => {
        $(
            impl FromValue for $t {
                const NAME: &'static str = stringify!($t);

                fn from_value(value: &Value) -> Result<Self> {
                    Ok(value.$via()? as $t)
                }
            }
        )*
    };
}

impl_from_value!(as_unsigned: u8, u16, u32, u64, usize);
impl_from_value!(as_signed: i8, i16, i32, i64, isize);
impl_from_value!(as_double: f32, f64);

impl FromValue for bool {
    const NAME: &'static str = "bool";

    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.as_unsigned()? != 0)
    }
}

impl FromValue for String {
    const NAME: &'static str = "String";

    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.as_text()?.into_owned())
    }
}

impl FromValue for Value {
    const NAME: &'static str = "Value";

    fn from_value(value: &Value) -> Result<Self> {
        Ok(value.clone())
    }
}
