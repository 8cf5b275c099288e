//! Text escaping and indentation helpers used by the pretty-printer.
//!
//! Escaping works byte by byte. Quotes, the backslash and the common control
//! characters get a two-character escape (`\n`, `\t`, ...). Any other byte
//! outside printable ASCII is written as a backslash followed by its decimal
//! code, so `é` (`0xC3 0xA9` in UTF-8) comes out as `\195\169`.

use alloc::string::String;
use core::fmt::{self, Write};

/// Returns the two-character escape for `byte`, if it has one.
#[must_use]
pub const fn short_escape(byte: u8) -> Option<&'static str> {
    Some(match byte {
        b'"' => "\\\"",
        b'\'' => "\\'",
        b'\\' => "\\\\",
        b'\n' => "\\n",
        b'\r' => "\\r",
        b'\t' => "\\t",
        0x07 => "\\a",
        0x08 => "\\b",
        0x0c => "\\f",
        0x0b => "\\v",
        _ => return None,
    })
}

const fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

/// Writes `text` to `out` with every special byte escaped.
pub fn escape_into<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    let bytes = text.as_bytes();
    let mut run_start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let short = short_escape(byte);
        if short.is_none() && is_printable(byte) {
            continue;
        }

        // Flush the printable run before this byte. Runs only ever end on
        // ASCII bytes, so the slice boundaries are char boundaries.
        if run_start < i {
            out.write_str(&text[run_start..i])?;
        }
        match short {
            Some(escape) => out.write_str(escape)?,
            None => write!(out, "\\{byte}")?,
        }
        run_start = i + 1;
    }

    if run_start < bytes.len() {
        out.write_str(&text[run_start..])?;
    }
    Ok(())
}

/// Writes `text` to `out` surrounded by double quotes and escaped.
pub fn quote_into<W: Write + ?Sized>(out: &mut W, text: &str) -> fmt::Result {
    out.write_char('"')?;
    escape_into(out, text)?;
    out.write_char('"')
}

/// Returns an escaped copy of `text`.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    // Writing into a String never fails
    let _ = escape_into(&mut out, text);
    out
}

/// Returns a quoted, escaped copy of `text`.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let _ = quote_into(&mut out, text);
    out
}

/// Writes `width` spaces to `out`.
pub fn write_indent<W: Write + ?Sized>(out: &mut W, width: usize) -> fmt::Result {
    const SPACES: &str = "                                ";
    let mut remaining = width;
    while remaining > 0 {
        let chunk = remaining.min(SPACES.len());
        out.write_str(&SPACES[..chunk])?;
        remaining -= chunk;
    }
    Ok(())
}
