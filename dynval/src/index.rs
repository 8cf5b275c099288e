//! Indexing into values by key or position.

use alloc::borrow::Cow;
use alloc::string::String;
use core::ops;

use crate::error::{IndexTarget, Result};
use crate::{Value, ValueType};

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for alloc::string::String {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A type that can index into a [`Value`]: `usize` for positions, string
/// types for keys.
///
/// Positions used on an object are converted to their decimal key. Keys used
/// on an array must be plain decimal digits.
pub trait ValueIndex: private::Sealed {
    /// Read access. A miss yields an owned null and leaves `v` untouched.
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Result<Cow<'v, Value>>;

    /// Write access, creating the entry (or growing the array) on a miss.
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value>;

    /// The key or position, for error messages.
    #[doc(hidden)]
    fn target(&self) -> IndexTarget;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Result<Cow<'v, Value>> {
        v.container().index_by_position(*self)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        v.vivify(ValueType::Array);
        v.container_mut().index_by_position_mut(*self)
    }

    fn target(&self) -> IndexTarget {
        IndexTarget::Position(*self)
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, v: &'v Value) -> Result<Cow<'v, Value>> {
        v.container().index_by_key(self)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        v.vivify(ValueType::Object);
        v.container_mut().index_by_key_mut(self)
    }

    fn target(&self) -> IndexTarget {
        IndexTarget::Key(self.into())
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, v: &'v Value) -> Result<Cow<'v, Value>> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(v)
    }

    fn target(&self) -> IndexTarget {
        self.as_str().target()
    }
}

impl<T: ?Sized + ValueIndex> ValueIndex for &T {
    fn index_into<'v>(&self, v: &'v Value) -> Result<Cow<'v, Value>> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(v)
    }

    fn target(&self) -> IndexTarget {
        (**self).target()
    }
}

impl Value {
    /// Reads the entry at `index`.
    ///
    /// An absent key or an out-of-range position yields an owned null; the
    /// value itself is never modified. Fails with
    /// [`BadIndex`](crate::ValueError::BadIndex) if this variant can't be
    /// indexed that way.
    ///
    /// ```
    /// use dynval::value;
    ///
    /// let doc = value!({"a": [10, 20]});
    /// assert_eq!(doc.get("a").unwrap().get(1).unwrap().as_signed().unwrap(), 20);
    /// assert!(doc.get("missing").unwrap().is_null());
    /// assert!(value!(42).get("x").is_err());
    /// ```
    pub fn get<I: ValueIndex>(&self, index: I) -> Result<Cow<'_, Value>> {
        index.index_into(self)
    }

    /// Returns a mutable reference to the entry at `index`, creating it if
    /// needed.
    ///
    /// Objects gain a null entry for an absent key. Arrays grow to fit the
    /// position, filling the gap with nulls. A null that was itself created
    /// this way becomes an object (for a key) or an array (for a position),
    /// so nested writes build every level they pass through. A clone of such a
    /// null is a plain null.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }
}

/// Panics if the entry is absent or this variant can't be indexed, like
/// [`BTreeMap`](alloc::collections::BTreeMap) does. Use [`Value::get`] for a
/// non-panicking read.
impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: I) -> &Value {
        match index.index_into(self) {
            Ok(Cow::Borrowed(entry)) => entry,
            Ok(Cow::Owned(_)) => {
                panic!("no entry at {} in `{}`", index.target(), self.value_type())
            }
            Err(err) => panic!("{err}"),
        }
    }
}

/// Creates the entry if needed, see [`Value::get_mut`]. Panics if this
/// variant can't be indexed.
impl<I: ValueIndex> ops::IndexMut<I> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Value {
        match index.index_into_mut(self) {
            Ok(entry) => entry,
            Err(err) => panic!("{err}"),
        }
    }
}
