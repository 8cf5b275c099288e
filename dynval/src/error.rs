//! Errors produced by casts and indexing.

use alloc::string::String;
use core::fmt;

use crate::ValueType;

/// The key or position an indexing operation was given.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexTarget {
    /// A text key
    Key(String),
    /// A numeric position
    Position(usize),
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexTarget::Key(key) => write!(f, "[{key:?}]"),
            IndexTarget::Position(pos) => write!(f, "[{pos}]"),
        }
    }
}

/// Error type for fallible [`Value`](crate::Value) operations.
///
/// Both kinds are reported as soon as they happen; the value that produced
/// them is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// The active variant can't produce the requested category, or a string
    /// didn't parse as a number.
    BadCast {
        /// Type of the value being converted
        from: ValueType,
        /// Name of the requested target
        to: &'static str,
    },
    /// The active variant doesn't support this kind of index, or a key
    /// couldn't be read as a position.
    BadIndex {
        /// Type of the value being indexed
        on: ValueType,
        /// The key or position that was rejected
        index: IndexTarget,
    },
}

impl ValueError {
    /// Returns `true` for [`ValueError::BadCast`].
    #[must_use]
    pub fn is_bad_cast(&self) -> bool {
        matches!(self, ValueError::BadCast { .. })
    }

    /// Returns `true` for [`ValueError::BadIndex`].
    #[must_use]
    pub fn is_bad_index(&self) -> bool {
        matches!(self, ValueError::BadIndex { .. })
    }

    /// Re-labels the target of a cast error, leaving index errors alone.
    pub(crate) fn retarget(self, to: &'static str) -> Self {
        match self {
            ValueError::BadCast { from, .. } => ValueError::BadCast { from, to },
            other => other,
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::BadCast { from, to } => {
                write!(f, "can't convert from `{from}` to `{to}`")
            }
            ValueError::BadIndex { on, index } => {
                write!(f, "can't index `{on}` with {index}")
            }
        }
    }
}

impl core::error::Error for ValueError {}

/// Result alias used throughout the crate.
pub type Result<T, E = ValueError> = core::result::Result<T, E>;
