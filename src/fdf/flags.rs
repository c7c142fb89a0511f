//! Per-field flag entries written into each FDF field record.
//!
//! FDF field dictionaries can set or clear bits on the target form:
//! `/SetF` and `/ClrF` act on the widget annotation flags, `/SetFf` and
//! `/ClrFf` on the field flags (ISO 32000-1:2008 Table 246).

use bitflags::bitflags;
use std::io::Write;

bitflags! {
    /// Widget annotation flags touched by FDF records.
    ///
    /// Per PDF spec Table 165 (Annotation flags).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AnnotationFlags: u32 {
        /// Bit 2: Annotation is not displayed or printed
        const HIDDEN = 1 << 1;
    }
}

bitflags! {
    /// Field flags touched by FDF records.
    ///
    /// Per PDF spec Table 221 (Field flags common to all field types).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FieldFlags: u32 {
        /// Bit 1: Field is read-only; user cannot change the value
        const READ_ONLY = 1 << 0;
    }
}

/// Write the hidden entry: `/SetF 2` when `hidden`, otherwise `/ClrF 2`.
pub fn write_hidden_entry<W: Write + ?Sized>(sink: &mut W, hidden: bool) -> std::io::Result<()> {
    let key = if hidden { "SetF" } else { "ClrF" };
    write!(sink, "/{} {}", key, AnnotationFlags::HIDDEN.bits())
}

/// Write the read-only entry: `/SetFf 1` when `readonly`, otherwise `/ClrFf 1`.
pub fn write_readonly_entry<W: Write + ?Sized>(
    sink: &mut W,
    readonly: bool,
) -> std::io::Result<()> {
    let key = if readonly { "SetFf" } else { "ClrFf" };
    write!(sink, "/{} {}", key, FieldFlags::READ_ONLY.bits())
}
