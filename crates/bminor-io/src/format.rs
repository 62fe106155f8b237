//! Textual conventions for each scalar type.
//!
//! Writers only write; flushing and error absorption belong to
//! [`Printer`](crate::Printer).

use std::io::{self, Write};

/// Render a float the way `print` statements show it.
///
/// A value equal to its own truncation prints with no decimal digits
/// (`4.0` -> `"4"`, `-0.0` -> `"-0"`). Anything else prints as the shortest
/// decimal string that parses back to the same value (`4.5` -> `"4.5"`,
/// `1e-7` -> `"1e-7"`). Non-finite values use the C spellings `inf`, `-inf`
/// and `nan`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == value.trunc() {
        return format!("{value:.0}");
    }
    let mut buf = ryu::Buffer::new();
    buf.format_finite(value).to_owned()
}

/// Write a 64-bit integer in decimal with no padding.
pub fn write_integer<W: Write>(out: &mut W, value: i64) -> io::Result<()> {
    write!(out, "{value}")
}

/// Write a float using [`format_float`].
pub fn write_float<W: Write>(out: &mut W, value: f64) -> io::Result<()> {
    out.write_all(format_float(value).as_bytes())
}

/// Write `true` or `false`.
pub fn write_boolean<W: Write>(out: &mut W, value: bool) -> io::Result<()> {
    out.write_all(if value { b"true" } else { b"false" })
}

/// Write one raw byte, unescaped.
pub fn write_char<W: Write>(out: &mut W, value: u8) -> io::Result<()> {
    out.write_all(&[value])
}

/// Write raw string bytes, or `placeholder` when the string is absent.
pub fn write_string<W: Write>(out: &mut W, text: Option<&[u8]>, placeholder: &str) -> io::Result<()> {
    match text {
        Some(bytes) => out.write_all(bytes),
        None => out.write_all(placeholder.as_bytes()),
    }
}
