//! String value type.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt::{self, Debug, Formatter};
use core::ops::Deref;

use crate::container::Container;
use crate::error::Result;
use crate::escape;
use crate::scalar::Scalar;
use crate::serialize::Serializer;
use crate::value::Cell;
use crate::{Value, ValueType};

/// A string value.
///
/// The text lives behind a single owning handle, so the variant takes one
/// pointer inside the value cell whatever its length.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VString(Box<String>);

impl VString {
    /// Creates a string value from anything that converts into a `String`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(Box::new(text.into()))
    }

    /// Returns the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the text for in-place editing.
    pub fn as_mut_string(&mut self) -> &mut String {
        &mut self.0
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses the whole text as a number, trying unsigned, then signed, then
    /// floating point. Non-finite floats don't count as numbers.
    fn parse_number<R>(&self, to: &'static str, convert: impl Fn(ParsedNumber) -> R) -> Result<R> {
        let text = self.as_str();
        let parsed = if let Ok(u) = text.parse::<u64>() {
            Some(ParsedNumber::Unsigned(u))
        } else if let Ok(i) = text.parse::<i64>() {
            Some(ParsedNumber::Signed(i))
        } else {
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(ParsedNumber::Double)
        };
        parsed.map(convert).ok_or_else(|| self.cast_error(to))
    }
}

#[derive(Clone, Copy)]
enum ParsedNumber {
    Unsigned(u64),
    Signed(i64),
    Double(f64),
}

impl ParsedNumber {
    fn to_unsigned(self) -> u64 {
        match self {
            ParsedNumber::Unsigned(u) => u,
            ParsedNumber::Signed(i) => i.to_unsigned(),
            ParsedNumber::Double(f) => f.to_unsigned(),
        }
    }

    fn to_signed(self) -> i64 {
        match self {
            ParsedNumber::Unsigned(u) => u.to_signed(),
            ParsedNumber::Signed(i) => i,
            ParsedNumber::Double(f) => f.to_signed(),
        }
    }

    fn to_double(self) -> f64 {
        match self {
            ParsedNumber::Unsigned(u) => u.to_double(),
            ParsedNumber::Signed(i) => i.to_double(),
            ParsedNumber::Double(f) => f,
        }
    }
}

impl Container for VString {
    fn value_type(&self) -> ValueType {
        ValueType::String
    }

    fn as_unsigned(&self) -> Result<u64> {
        self.parse_number("unsigned", ParsedNumber::to_unsigned)
    }

    fn as_signed(&self) -> Result<i64> {
        self.parse_number("signed", ParsedNumber::to_signed)
    }

    fn as_double(&self) -> Result<f64> {
        self.parse_number("double", ParsedNumber::to_double)
    }

    fn as_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }

    fn serialize(&self, s: &mut Serializer<'_>) -> fmt::Result {
        escape::quote_into(s, self.as_str())
    }
}

impl Deref for VString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for VString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Debug for VString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl From<&str> for VString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for VString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

// === Value conversions ===

impl From<VString> for Value {
    fn from(s: VString) -> Self {
        Value(Cell::String(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        VString::new(s).into()
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        VString::new(s).into()
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        VString::new(s.as_str()).into()
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(s: Cow<'_, str>) -> Self {
        VString::new(s.into_owned()).into()
    }
}
