//! Error types for the FDF writer.
//!
//! Only two things can go wrong: the sink refuses bytes, or the caller
//! hands over field data that cannot form a document.

/// Result type alias for FDF operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or writing an FDF document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error from the sink or destination file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The same field name was supplied twice during construction
    #[error("Duplicate field name: '{0}'")]
    DuplicateField(String),
}
