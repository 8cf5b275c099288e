//! Object (map) value type.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Formatter, Write as _};
use core::iter::FromIterator;

use crate::container::Container;
use crate::error::Result;
use crate::escape;
use crate::serialize::Serializer;
use crate::value::Cell;
use crate::{Value, ValueType};

/// An object value: unique text keys mapped to values, kept in ascending key
/// order.
///
/// Reading an absent key yields an owned null and leaves the object alone;
/// writing through an absent key creates the entry.
#[derive(Clone, PartialEq, Default)]
pub struct VObject(Box<BTreeMap<String, Value>>);

impl VObject {
    /// Creates a new empty object.
    #[must_use]
    pub fn new() -> Self {
        Self(Box::default())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Gets a mutable value by key, without creating it.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Checks if the object contains a key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a key-value pair, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Returns an iterator over the keys, in ascending order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in key order.
    pub fn values(&self) -> btree_map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the entries, in key order.
    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, String, Value> {
        self.0.iter_mut()
    }

    /// Converts this VObject into a Value, consuming self.
    #[inline]
    pub fn into_value(self) -> Value {
        Value(Cell::Object(self))
    }
}

impl Container for VObject {
    fn value_type(&self) -> ValueType {
        ValueType::Object
    }

    fn index_by_key(&self, key: &str) -> Result<Cow<'_, Value>> {
        Ok(self.0.get(key).map_or(Cow::Owned(Value::NULL), Cow::Borrowed))
    }

    fn index_by_key_mut(&mut self, key: &str) -> Result<&mut Value> {
        Ok(self.0.entry(key.to_string()).or_insert_with(|| {
            debug!("creating object entry {:?}", key);
            Value::vacant()
        }))
    }

    fn index_by_position(&self, pos: usize) -> Result<Cow<'_, Value>> {
        self.index_by_key(&pos.to_string())
    }

    fn index_by_position_mut(&mut self, pos: usize) -> Result<&mut Value> {
        self.index_by_key_mut(&pos.to_string())
    }

    fn serialize(&self, s: &mut Serializer<'_>) -> fmt::Result {
        s.write_container('{', '}', self.iter(), |s, (key, value)| {
            escape::quote_into(s, key)?;
            s.write_str(": ")?;
            value.serialize_into(s)
        })
    }
}

// === Iterator ===

impl IntoIterator for VObject {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        (*self.0).into_iter()
    }
}

impl<'a> IntoIterator for &'a VObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for VObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// === FromIterator / Extend ===

/// Later duplicates of a key replace earlier ones.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = VObject::new();
        obj.extend(iter);
        obj
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for VObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

// === From implementations ===

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for VObject {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(map: BTreeMap<K, V>) -> Self {
        VObject::from(map).into_value()
    }
}

impl From<VObject> for Value {
    fn from(obj: VObject) -> Self {
        obj.into_value()
    }
}

/// Collect key-value pairs into an object Value.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().collect::<VObject>().into_value()
    }
}
