//! Core `Value` type: a fixed-size cell holding exactly one variant.
//!
//! # Memory Layout
//!
//! The cell is a tagged union. Scalars and null are stored inline, so they
//! never allocate. Strings, arrays and objects keep a single owning pointer
//! inline and their payload on the heap:
//!
//! ```text
//! ┌──────────┬──────────────────────────────────┐
//! │   tag    │           payload (8 bytes)      │
//! ├──────────┼──────────────────────────────────┤
//! │ Null     │ vacant flag                      │
//! │ Unsigned │ u64                              │
//! │ Signed   │ i64                              │
//! │ Double   │ f64                              │
//! │ String   │ Box<String>  ──▶ heap            │
//! │ Array    │ Box<Vec<Value>>  ──▶ heap        │
//! │ Object   │ Box<BTreeMap<String, Value>> ──▶ │
//! └──────────┴──────────────────────────────────┘
//! ```
//!
//! Every operation dispatches on the tag to the active variant's
//! `Container` implementation, so adding a variant is a compile error
//! everywhere it isn't handled.

use alloc::borrow::Cow;
use core::fmt::{self, Debug, Formatter};
use core::mem;

use crate::array::VArray;
use crate::container::Container;
use crate::error::Result;
use crate::null::VNull;
use crate::object::VObject;
use crate::scalar::VScalar;
use crate::string::VString;

/// Enum distinguishing the value types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// Null value
    Null,
    /// Unsigned 64-bit integer (also used for booleans)
    Unsigned,
    /// Signed 64-bit integer
    Signed,
    /// 64-bit floating point
    Double,
    /// String (UTF-8)
    String,
    /// Array
    Array,
    /// Object (key-value map)
    Object,
}

impl ValueType {
    /// Lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Unsigned => "unsigned",
            ValueType::Signed => "signed",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The storage cell. Exactly one variant is live at a time.
#[derive(Clone, PartialEq)]
pub(crate) enum Cell {
    Null(VNull),
    Unsigned(VScalar<u64>),
    Signed(VScalar<i64>),
    Double(VScalar<f64>),
    String(VString),
    Array(VArray),
    Object(VObject),
}

// Scalars live inline next to the tag; indirect variants are one pointer.
static_assertions::assert_eq_size!(VString, VArray, VObject, usize);
static_assertions::const_assert!(mem::size_of::<Value>() <= 2 * mem::size_of::<u64>());

/// A dynamic value that can represent null, numbers, strings, arrays, or
/// objects.
///
/// `Value` is a fixed-size cell (two words on 64-bit targets). Cloning makes
/// a full deep copy; moving transfers ownership of any heap payload and the
/// compiler rejects later use of the moved-from binding. Use [`Value::take`]
/// to move out of a place that has to stay initialized.
#[derive(Clone, PartialEq, Default)]
#[repr(transparent)]
pub struct Value(pub(crate) Cell);

impl Default for Cell {
    fn default() -> Self {
        Cell::Null(VNull::NULL)
    }
}

/// Forwards `$body` to whichever variant is active, binding it as `$c`.
macro_rules! dispatch {
    ($cell:expr, $c:ident => $body:expr) => {
        match $cell {
            Cell::Null($c) => $body,
            Cell::Unsigned($c) => $body,
            Cell::Signed($c) => $body,
            Cell::Double($c) => $body,
            Cell::String($c) => $body,
            Cell::Array($c) => $body,
            Cell::Object($c) => $body,
        }
    };
}

impl Value {
    /// The null value.
    pub const NULL: Self = Self(Cell::Null(VNull::NULL));

    /// A null created by write-indexing; upgraded on the next write through it.
    pub(crate) const fn vacant() -> Self {
        Self(Cell::Null(VNull::VACANT))
    }

    pub(crate) fn container(&self) -> &dyn Container {
        dispatch!(&self.0, c => c as &dyn Container)
    }

    pub(crate) fn container_mut(&mut self) -> &mut dyn Container {
        dispatch!(&mut self.0, c => c as &mut dyn Container)
    }

    /// Turns a vacant null into an empty container of `kind` so a write can
    /// pass through it. Anything else is left alone.
    pub(crate) fn vivify(&mut self, kind: ValueType) {
        if let Cell::Null(null) = &self.0 {
            if null.is_vacant() {
                debug!("vivifying vacant null into {}", kind);
                self.0 = match kind {
                    ValueType::Array => Cell::Array(VArray::new()),
                    _ => Cell::Object(VObject::new()),
                };
            }
        }
    }

    /// Creates an array from a sequence of items.
    pub fn array<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        items.into_iter().collect::<VArray>().into_value()
    }

    /// Creates an object from key-value pairs. Later duplicates of a key
    /// replace earlier ones.
    pub fn object<K: Into<alloc::string::String>, V: Into<Value>>(
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        entries.into_iter().collect::<VObject>().into_value()
    }

    // === Public type checking ===

    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        self.container().value_type()
    }

    /// Returns `true` if this is the `null` value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.0, Cell::Null(_))
    }

    /// Returns `true` if this is an unsigned integer.
    #[must_use]
    pub fn is_unsigned(&self) -> bool {
        matches!(self.0, Cell::Unsigned(_))
    }

    /// Returns `true` if this is a signed integer.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        matches!(self.0, Cell::Signed(_))
    }

    /// Returns `true` if this is a floating point number.
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self.0, Cell::Double(_))
    }

    /// Returns `true` if this is any kind of number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self.0, Cell::Unsigned(_) | Cell::Signed(_) | Cell::Double(_))
    }

    /// Returns `true` if this is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self.0, Cell::String(_))
    }

    /// Returns `true` if this is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.0, Cell::Array(_))
    }

    /// Returns `true` if this is an object.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.0, Cell::Object(_))
    }

    // === Coercions ===

    /// Converts to `u64`. Numbers are cast, strings are parsed.
    pub fn as_unsigned(&self) -> Result<u64> {
        self.container().as_unsigned()
    }

    /// Converts to `i64`. Numbers are cast, strings are parsed.
    pub fn as_signed(&self) -> Result<i64> {
        self.container().as_signed()
    }

    /// Converts to `f64`. Numbers are cast, strings are parsed.
    pub fn as_double(&self) -> Result<f64> {
        self.container().as_double()
    }

    /// Returns the text form: the string itself, a number's decimal form, or
    /// `null`. Arrays and objects have no text form.
    pub fn as_text(&self) -> Result<Cow<'_, str>> {
        self.container().as_text()
    }

    // === Borrowing accessors ===

    /// Returns the string contents. Returns `None` if not a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.0 {
            Cell::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Gets a reference to this value as a `VString`. Returns `None` if not a string.
    #[must_use]
    pub fn as_string(&self) -> Option<&VString> {
        match &self.0 {
            Cell::String(s) => Some(s),
            _ => None,
        }
    }

    /// Gets a mutable reference to this value as a `VString`.
    pub fn as_string_mut(&mut self) -> Option<&mut VString> {
        match &mut self.0 {
            Cell::String(s) => Some(s),
            _ => None,
        }
    }

    /// Gets a reference to this value as a `VArray`. Returns `None` if not an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&VArray> {
        match &self.0 {
            Cell::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Gets a mutable reference to this value as a `VArray`.
    pub fn as_array_mut(&mut self) -> Option<&mut VArray> {
        match &mut self.0 {
            Cell::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Gets a reference to this value as a `VObject`. Returns `None` if not an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&VObject> {
        match &self.0 {
            Cell::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Gets a mutable reference to this value as a `VObject`.
    pub fn as_object_mut(&mut self) -> Option<&mut VObject> {
        match &mut self.0 {
            Cell::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Number of elements for arrays, entries for objects, bytes for strings.
    /// Returns `None` for null and numbers.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match &self.0 {
            Cell::String(s) => Some(s.len()),
            Cell::Array(a) => Some(a.len()),
            Cell::Object(o) => Some(o.len()),
            Cell::Null(_) | Cell::Unsigned(_) | Cell::Signed(_) | Cell::Double(_) => None,
        }
    }

    /// Takes this value, replacing it with `Value::NULL`.
    pub fn take(&mut self) -> Value {
        mem::replace(self, Value::NULL)
    }

    /// Destructure this value into an enum for pattern matching (by reference).
    #[must_use]
    pub fn destructure_ref(&self) -> DestructuredRef<'_> {
        match &self.0 {
            Cell::Null(_) => DestructuredRef::Null,
            Cell::Unsigned(u) => DestructuredRef::Unsigned(u.get()),
            Cell::Signed(i) => DestructuredRef::Signed(i.get()),
            Cell::Double(f) => DestructuredRef::Double(f.get()),
            Cell::String(s) => DestructuredRef::String(s.as_str()),
            Cell::Array(a) => DestructuredRef::Array(a),
            Cell::Object(o) => DestructuredRef::Object(o),
        }
    }
}

/// Enum for destructuring a `Value` by reference.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DestructuredRef<'a> {
    /// Null value
    Null,
    /// Unsigned integer
    Unsigned(u64),
    /// Signed integer
    Signed(i64),
    /// Floating point number
    Double(f64),
    /// String value
    String(&'a str),
    /// Array value
    Array(&'a VArray),
    /// Object value
    Object(&'a VObject),
}

// === Debug ===

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        dispatch!(&self.0, c => Debug::fmt(c, f))
    }
}

// === From implementations ===

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::NULL
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::NULL,
        }
    }
}

// === FromIterator implementations ===

impl<T: Into<Value>> core::iter::FromIterator<T> for Value {
    /// Collect into an array Value.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::array(iter)
    }
}
