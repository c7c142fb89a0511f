//! Forms Data Format (FDF) writer.
//!
//! An FDF file carries values for the interactive fields of a PDF form
//! without the form itself (ISO 32000-1:2008 Section 12.7.7). This module
//! writes FDF 1.2 documents that a viewer can import to pre-fill a form,
//! and optionally hide fields or lock them against editing.
//!
//! ## Output layout
//!
//! ```text
//! %FDF-1.2
//! %<E2 E3 CF D3>
//!
//! 1 0 obj
//! <<
//! /FDF
//! <<
//! /Fields [
//! <<
//! /V (<FE FF>value as UTF-16BE)
//! /T (<FE FF>name as UTF-16BE)
//! /ClrF 2          or /SetF 2 for hidden fields
//! /ClrFf 1         or /SetFf 1 for read-only fields
//! >>
//! /F (<FE FF>form URL as UTF-16BE)     only when a form URL is set
//! ]
//! >>
//! >>
//! endobj
//! trailer
//!
//! <<
//! /Root 1 0 R
//! >>
//! %%EOF
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use fdf_forge::fdf::FdfDocument;
//!
//! # fn main() -> fdf_forge::Result<()> {
//! let doc = FdfDocument::builder()
//!     .form_url("http://example.com/application.pdf")
//!     .field("Name", "Bob")
//!     .readonly("Name")
//!     .build()?;
//! doc.save("application.fdf")?;
//! # Ok(())
//! # }
//! ```

mod builder;
mod document;
pub mod encoding;
pub mod flags;

pub use builder::FdfDocumentBuilder;
pub use document::FdfDocument;
pub use encoding::escape_nul_parens;
pub use flags::{AnnotationFlags, FieldFlags};
