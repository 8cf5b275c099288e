//! Null value type.

use alloc::borrow::Cow;

use crate::container::Container;
use crate::error::Result;
use crate::ValueType;

/// The null variant.
///
/// Nulls created by write-indexing (new object entries, array gap fillers)
/// are marked vacant. A vacant null turns into an object or array the first
/// time something is written through it, which is what lets
/// `doc["a"]["b"] = 1` build both levels. A null built any other way stays a
/// plain null and rejects indexing. Cloning a vacant null gives a plain one.
#[derive(Default)]
pub struct VNull {
    vacant: bool,
}

impl VNull {
    pub(crate) const NULL: Self = Self { vacant: false };
    pub(crate) const VACANT: Self = Self { vacant: true };

    /// Returns `true` if this null was created as a write-index placeholder.
    #[must_use]
    pub const fn is_vacant(&self) -> bool {
        self.vacant
    }
}

impl Container for VNull {
    fn value_type(&self) -> ValueType {
        ValueType::Null
    }

    fn as_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed("null"))
    }
}

// Vacancy belongs to the slot that was created, not to copies of it.
impl Clone for VNull {
    fn clone(&self) -> Self {
        Self::NULL
    }
}

// The vacant flag is bookkeeping, not data.
impl PartialEq for VNull {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for VNull {}

impl core::fmt::Debug for VNull {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("null")
    }
}
