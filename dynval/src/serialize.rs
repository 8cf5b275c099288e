//! Pretty-printing of values as indented, JSON-like text.
//!
//! Containers open on their own line, put each entry on its own line
//! indented one level deeper, and close at the indentation of the container.
//! Object entries come out in ascending key order. The output reads like
//! JSON but isn't strict JSON: strings use the escape table from
//! [`escape`](crate::escape), which includes escapes JSON doesn't know.

use alloc::string::String;
use core::fmt::{self, Display, Formatter, Write};

use crate::Value;
use crate::escape;

/// Options controlling how values are pretty-printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces per nesting level (default: 2)
    pub indent_width: usize,
    /// Nesting level of the value being printed (default: 0). Controls the
    /// indentation of the closing bracket and of every entry.
    pub depth: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SerializeOptions {
    /// Create new default options: two spaces per level, starting at depth 0.
    pub const fn new() -> Self {
        Self {
            indent_width: 2,
            depth: 0,
        }
    }

    /// Set the number of spaces per nesting level.
    pub const fn indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    /// Set the starting nesting level.
    pub const fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// Writer state threaded through the recursive rendering.
pub(crate) struct Serializer<'a> {
    out: &'a mut dyn Write,
    indent_width: usize,
    depth: usize,
}

impl<'a> Serializer<'a> {
    pub(crate) fn new(out: &'a mut dyn Write, options: &SerializeOptions) -> Self {
        Self {
            out,
            indent_width: options.indent_width,
            depth: options.depth,
        }
    }

    /// Writes a bracketed, comma-separated block with one entry per line.
    /// Empty containers print as `[]` / `{}`.
    pub(crate) fn write_container<I, F>(
        &mut self,
        open: char,
        close: char,
        items: I,
        mut write_item: F,
    ) -> fmt::Result
    where
        I: IntoIterator,
        F: FnMut(&mut Self, I::Item) -> fmt::Result,
    {
        let mut items = items.into_iter().peekable();
        self.out.write_char(open)?;
        if items.peek().is_none() {
            return self.out.write_char(close);
        }

        self.out.write_char('\n')?;
        self.depth += 1;
        let mut first = true;
        for item in items {
            if !first {
                self.out.write_str(",\n")?;
            }
            first = false;
            escape::write_indent(&mut *self.out, self.depth * self.indent_width)?;
            write_item(self, item)?;
        }
        self.depth -= 1;

        self.out.write_char('\n')?;
        escape::write_indent(&mut *self.out, self.depth * self.indent_width)?;
        self.out.write_char(close)
    }
}

impl Write for Serializer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
}

/// A [`Display`] adapter that pretty-prints a value with fixed options.
///
/// Returned by [`Value::pretty`].
#[derive(Clone, Copy, Debug)]
pub struct Pretty<'a> {
    value: &'a Value,
    options: SerializeOptions,
}

impl Display for Pretty<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut s = Serializer::new(f, &self.options);
        self.value.serialize_into(&mut s)
    }
}

impl Value {
    /// Pretty-prints this value with `indent_width` spaces per level, as if
    /// it were nested `depth` levels deep.
    ///
    /// Non-finite doubles have no decimal form and print as `NaN`, `inf` or
    /// `-inf`, which is not valid JSON.
    #[must_use]
    pub fn serialize(&self, indent_width: usize, depth: usize) -> String {
        self.serialize_with(
            &SerializeOptions::new()
                .indent_width(indent_width)
                .depth(depth),
        )
    }

    /// Pretty-prints this value with the given options.
    #[must_use]
    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        let mut s = Serializer::new(&mut out, options);
        // Every variant can render itself and writing into a String never
        // fails, so there is no error to report here.
        let _ = self.serialize_into(&mut s);
        out
    }

    /// Returns a [`Display`] adapter using `options`.
    #[must_use]
    pub fn pretty(&self, options: SerializeOptions) -> Pretty<'_> {
        Pretty {
            value: self,
            options,
        }
    }

    pub(crate) fn serialize_into(&self, s: &mut Serializer<'_>) -> fmt::Result {
        self.container().serialize(s)
    }
}

/// Pretty-prints with [`SerializeOptions::default`].
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.pretty(SerializeOptions::default()), f)
    }
}
