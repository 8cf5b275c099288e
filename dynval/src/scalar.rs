//! Fixed-width numeric variants, stored inline in the value cell.

use alloc::borrow::Cow;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display, Formatter};

use crate::container::Container;
use crate::error::Result;
use crate::value::Cell;
use crate::{Value, ValueType};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u64 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A numeric payload that a [`VScalar`] can hold.
///
/// Conversions between payloads are plain `as` casts: integers wrap, floats
/// truncate toward zero and saturate, NaN becomes zero.
pub trait Scalar: Copy + PartialEq + Debug + Display + sealed::Sealed {
    /// The value type reported by a scalar of this payload.
    const VALUE_TYPE: ValueType;

    /// Converts to `u64`.
    fn to_unsigned(self) -> u64;
    /// Converts to `i64`.
    fn to_signed(self) -> i64;
    /// Converts to `f64`.
    fn to_double(self) -> f64;
}

impl Scalar for u64 {
    const VALUE_TYPE: ValueType = ValueType::Unsigned;

    fn to_unsigned(self) -> u64 {
        self
    }
    fn to_signed(self) -> i64 {
        self as i64
    }
    fn to_double(self) -> f64 {
        self as f64
    }
}

impl Scalar for i64 {
    const VALUE_TYPE: ValueType = ValueType::Signed;

    fn to_unsigned(self) -> u64 {
        self as u64
    }
    fn to_signed(self) -> i64 {
        self
    }
    fn to_double(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    const VALUE_TYPE: ValueType = ValueType::Double;

    fn to_unsigned(self) -> u64 {
        self as u64
    }
    fn to_signed(self) -> i64 {
        self as i64
    }
    fn to_double(self) -> f64 {
        self
    }
}

/// A scalar variant: an unsigned, signed or floating point number.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct VScalar<T: Scalar>(T);

impl<T: Scalar> VScalar<T> {
    /// Wraps a payload.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the payload.
    #[must_use]
    pub const fn get(self) -> T {
        self.0
    }
}

impl<T: Scalar> Container for VScalar<T> {
    fn value_type(&self) -> ValueType {
        T::VALUE_TYPE
    }

    fn as_unsigned(&self) -> Result<u64> {
        Ok(self.0.to_unsigned())
    }

    fn as_signed(&self) -> Result<i64> {
        Ok(self.0.to_signed())
    }

    fn as_double(&self) -> Result<f64> {
        Ok(self.0.to_double())
    }

    fn as_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Owned(self.0.to_string()))
    }
}

impl<T: Scalar> Debug for VScalar<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

// === From implementations ===

macro_rules! impl_from_scalar {
    ($($t:ty => $variant:ident as $payload:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value(Cell::$variant(VScalar::new(v as $payload)))
                }
            }
        )*
    };
}

impl_from_scalar! {
    u8 => Unsigned as u64,
    u16 => Unsigned as u64,
    u32 => Unsigned as u64,
    u64 => Unsigned as u64,
    usize => Unsigned as u64,
    i8 => Signed as i64,
    i16 => Signed as i64,
    i32 => Signed as i64,
    i64 => Signed as i64,
    isize => Signed as i64,
    f32 => Double as f64,
    f64 => Double as f64,
}

/// Booleans are stored as unsigned `0` or `1`.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value(Cell::Unsigned(VScalar::new(u64::from(b))))
    }
}

/// Characters are stored as their signed code point.
impl From<char> for Value {
    fn from(c: char) -> Self {
        Value(Cell::Signed(VScalar::new(i64::from(u32::from(c)))))
    }
}
