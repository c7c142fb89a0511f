//! # FDF Forge
//!
//! Writes FDF (Forms Data Format) documents that pre-fill interactive
//! PDF form fields.
//!
//! A document is a form URL plus an ordered set of named field values.
//! Each field can additionally be hidden or made read-only when the data
//! is imported. Output is deterministic: the same document always yields
//! the same bytes.
//!
//! ## Quick Start
//!
//! ```
//! use fdf_forge::FdfDocument;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let doc = FdfDocument::builder()
//!     .field("Name", "Bob")
//!     .field("Email", "bob@example.com")
//!     .readonly("Name")
//!     .build()?;
//!
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.ends_with(b"%%EOF\n\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// FDF writing
pub mod fdf;

pub use config::WriterConfig;
pub use error::{Error, Result};
pub use fdf::{FdfDocument, FdfDocumentBuilder};
