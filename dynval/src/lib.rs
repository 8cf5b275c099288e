//! `dynval` provides a dynamically typed value for representing JSON-like
//! structured data: null, unsigned and signed integers, doubles, strings,
//! arrays and objects.
//!
//! # Features
//!
//! - **Two-word `Value` cell**: numbers and null live inline; strings, arrays
//!   and objects keep one owning pointer to their heap payload
//! - **Value semantics**: cloning is a deep copy, moving transfers ownership
//! - **Auto-vivifying writes**: `doc["a"]["b"] = value!(1)` creates every
//!   level it passes through, while reads never modify anything
//! - **Checked coercions**: [`cast`] converts to any primitive, parsing
//!   numeric text, and reports a [`ValueError`] on mismatch
//! - **Pretty-printing**: indented, key-sorted, JSON-like output via
//!   [`Value::serialize`] or `Display`
//!
//! # Example
//!
//! ```
//! use dynval::{Value, cast, value};
//!
//! let mut doc = value!({"name": "cell", "sizes": [8, 16]});
//! doc["meta"]["version"] = Value::from(2);
//!
//! assert!(doc["meta"].is_object());
//! assert_eq!(cast::<i32>(&doc["meta"]["version"]).unwrap(), 2);
//! assert_eq!(
//!     doc.serialize(2, 0),
//!     "{\n  \"meta\": {\n    \"version\": 2\n  },\n  \"name\": \"cell\",\n  \"sizes\": [\n    8,\n    16\n  ]\n}"
//! );
//! ```
//!
//! # Logging
//!
//! With the `tracing` feature enabled, auto-vivification is logged at debug
//! level and failed casts or index operations at trace level.

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod tracing_macros;

mod macros;

mod value;
pub use value::{DestructuredRef, Value, ValueType};

mod container;

mod null;
pub use null::VNull;

mod scalar;
pub use scalar::{Scalar, VScalar};

mod string;
pub use string::VString;

mod array;
pub use array::VArray;

mod object;
pub use object::VObject;

mod error;
pub use error::{IndexTarget, Result, ValueError};

mod index;
pub use index::ValueIndex;

mod cast;
pub use cast::{FromValue, cast};

pub mod escape;

mod serialize;
pub use serialize::{Pretty, SerializeOptions};
