//! Byte-level encoding of FDF string literals.
//!
//! Every key, value and form URL is written as a UTF-16BE literal string
//! prefixed with a byte-order mark. ASCII parentheses inside such a string
//! show up as a NUL high byte followed by `(` or `)`, so the only escaping
//! performed is a backslash between a NUL and a parenthesis.

use byteorder::{BigEndian, WriteBytesExt};
use std::borrow::Cow;
use std::io::Write;

/// UTF-16 big-endian byte-order mark.
pub const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

/// Escape NUL-parenthesis pairs in `s`.
///
/// `"\0)"` becomes `"\0\\)"` and `"\0("` becomes `"\0\\("`. Bare
/// parentheses and backslashes are left alone. Borrows when nothing
/// needs escaping.
///
/// The result never contains a NUL directly followed by a parenthesis,
/// so escaping an already escaped string returns it unchanged.
pub fn escape_nul_parens(s: &str) -> Cow<'_, str> {
    if !s.contains("\0(") && !s.contains("\0)") {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.replace("\0)", "\0\\)").replace("\0(", "\0\\("))
}

/// Write `s` as UTF-16BE code units. Characters outside the BMP become
/// surrogate pairs.
pub fn write_utf16be<W: Write + ?Sized>(sink: &mut W, s: &str) -> std::io::Result<()> {
    for unit in s.encode_utf16() {
        sink.write_u16::<BigEndian>(unit)?;
    }
    Ok(())
}

/// Encode `s` as UTF-16BE into a new buffer.
pub fn to_utf16be(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 2);
    for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
    }
    out
}

/// Write a complete literal: `(`, BOM, UTF-16BE text, `)`.
///
/// The text is written as given; callers escape beforehand when needed.
pub fn write_literal<W: Write + ?Sized>(sink: &mut W, s: &str) -> std::io::Result<()> {
    sink.write_all(b"(")?;
    sink.write_all(&UTF16_BOM)?;
    write_utf16be(sink, s)?;
    sink.write_all(b")")
}
