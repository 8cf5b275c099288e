//! The capability set shared by every concrete variant.
//!
//! Each variant implements the subset it supports. Everything else falls back
//! to the provided methods, which fail with [`ValueError::BadCast`] or
//! [`ValueError::BadIndex`].

use alloc::borrow::Cow;
use core::fmt::{self, Write as _};

use crate::error::{IndexTarget, Result, ValueError};
use crate::serialize::Serializer;
use crate::{Value, ValueType};

pub(crate) trait Container {
    /// Which variant this is.
    fn value_type(&self) -> ValueType;

    fn as_unsigned(&self) -> Result<u64> {
        Err(self.cast_error("unsigned"))
    }

    fn as_signed(&self) -> Result<i64> {
        Err(self.cast_error("signed"))
    }

    fn as_double(&self) -> Result<f64> {
        Err(self.cast_error("double"))
    }

    fn as_text(&self) -> Result<Cow<'_, str>> {
        Err(self.cast_error("string"))
    }

    /// Read access by key. A miss yields an owned null, never a shared one.
    fn index_by_key(&self, key: &str) -> Result<Cow<'_, Value>> {
        Err(self.index_error(IndexTarget::Key(key.into())))
    }

    /// Write access by key, creating the entry if needed.
    fn index_by_key_mut(&mut self, key: &str) -> Result<&mut Value> {
        Err(self.index_error(IndexTarget::Key(key.into())))
    }

    fn index_by_position(&self, pos: usize) -> Result<Cow<'_, Value>> {
        Err(self.index_error(IndexTarget::Position(pos)))
    }

    fn index_by_position_mut(&mut self, pos: usize) -> Result<&mut Value> {
        Err(self.index_error(IndexTarget::Position(pos)))
    }

    /// Writes the pretty-printed form. Scalars just print their text.
    fn serialize(&self, s: &mut Serializer<'_>) -> fmt::Result {
        let text = self.as_text().map_err(|_| fmt::Error)?;
        s.write_str(&text)
    }

    fn cast_error(&self, to: &'static str) -> ValueError {
        let from = self.value_type();
        trace!("bad cast from {} to {}", from, to);
        ValueError::BadCast { from, to }
    }

    fn index_error(&self, index: IndexTarget) -> ValueError {
        let on = self.value_type();
        trace!("bad index {} on {}", index, on);
        ValueError::BadIndex { on, index }
    }
}
