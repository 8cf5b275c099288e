//! Array value type.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::iter::FromIterator;
use core::ops::Deref;

use crate::container::Container;
use crate::error::{IndexTarget, Result};
use crate::serialize::Serializer;
use crate::value::Cell;
use crate::{Value, ValueType};

/// An array value.
///
/// `VArray` owns its elements through a single boxed `Vec<Value>`. Reading
/// past the end yields an owned null; writing past the end grows the array,
/// filling the gap with nulls.
#[derive(Clone, PartialEq, Default)]
pub struct VArray(Box<Vec<Value>>);

impl VArray {
    /// Creates a new empty array.
    #[must_use]
    pub fn new() -> Self {
        Self(Box::default())
    }

    /// Creates a new array with the specified capacity.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        Self(Box::new(Vec::with_capacity(cap)))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a slice of the elements.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Returns a mutable slice of the elements.
    pub fn as_mut_slice(&mut self) -> &mut [Value] {
        &mut self.0
    }

    /// Gets an element by position, without growing.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<&Value> {
        self.0.get(pos)
    }

    /// Gets a mutable element by position, without growing.
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut Value> {
        self.0.get_mut(pos)
    }

    /// Pushes an element onto the back.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Pops an element from the back.
    pub fn pop(&mut self) -> Option<Value> {
        self.0.pop()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Value> {
        self.0.iter_mut()
    }

    /// Converts this VArray into a Value, consuming self.
    #[inline]
    pub fn into_value(self) -> Value {
        Value(Cell::Array(self))
    }
}

/// Reads `key` as a position. Only plain decimal digits qualify.
fn parse_position(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

impl Container for VArray {
    fn value_type(&self) -> ValueType {
        ValueType::Array
    }

    fn index_by_key(&self, key: &str) -> Result<Cow<'_, Value>> {
        match parse_position(key) {
            Some(pos) => self.index_by_position(pos),
            None => Err(self.index_error(IndexTarget::Key(key.into()))),
        }
    }

    fn index_by_key_mut(&mut self, key: &str) -> Result<&mut Value> {
        match parse_position(key) {
            Some(pos) => self.index_by_position_mut(pos),
            None => Err(self.index_error(IndexTarget::Key(key.into()))),
        }
    }

    fn index_by_position(&self, pos: usize) -> Result<Cow<'_, Value>> {
        Ok(self.0.get(pos).map_or(Cow::Owned(Value::NULL), Cow::Borrowed))
    }

    fn index_by_position_mut(&mut self, pos: usize) -> Result<&mut Value> {
        let len = self.0.len();
        if pos >= len {
            // The array is left untouched unless the whole growth fits.
            let new_len = match pos.checked_add(1) {
                Some(new_len) if self.0.try_reserve(new_len - len).is_ok() => new_len,
                _ => return Err(self.index_error(IndexTarget::Position(pos))),
            };
            debug!("growing array from {} to {} elements", len, new_len);
            self.0.resize_with(new_len, Value::vacant);
        }
        Ok(&mut self.0[pos])
    }

    fn serialize(&self, s: &mut Serializer<'_>) -> fmt::Result {
        s.write_container('[', ']', self.iter(), |s, item| item.serialize_into(s))
    }
}

// === Iterator ===

impl IntoIterator for VArray {
    type Item = Value;
    type IntoIter = alloc::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        (*self.0).into_iter()
    }
}

impl<'a> IntoIterator for &'a VArray {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut VArray {
    type Item = &'a mut Value;
    type IntoIter = core::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl Deref for VArray {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        self.as_slice()
    }
}

impl Debug for VArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_slice(), f)
    }
}

// === FromIterator / Extend ===

impl<T: Into<Value>> FromIterator<T> for VArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(Box::new(iter.into_iter().map(Into::into).collect()))
    }
}

impl<T: Into<Value>> Extend<T> for VArray {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

// === From implementations ===

impl<T: Into<Value>> From<Vec<T>> for VArray {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl From<VArray> for Value {
    fn from(arr: VArray) -> Self {
        arr.into_value()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(vec: Vec<T>) -> Self {
        VArray::from(vec).into_value()
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect::<VArray>().into_value()
    }
}
