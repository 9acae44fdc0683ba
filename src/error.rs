//! Error types for the guano-wav crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum GuanoError {
    /// An error from the underlying stream or file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a well-formed RIFF/WAVE container
    /// (bad magic, truncated chunk header, or truncated payload).
    #[error("invalid RIFF container: {0}")]
    Format(String),

    /// A GUANO metadata line has no `:` separator.
    #[error("malformed metadata line (no ':' separator): {0:?}")]
    MalformedLine(String),

    /// The `guan` chunk payload is not valid UTF-8.
    #[error("metadata chunk is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A stored value could not be parsed as the requested numeric type.
    #[error("field {field:?} holds {value:?}, not a valid number")]
    NumberFormat { field: String, value: String },

    /// A getter was asked for a namespace or field that is not present.
    #[error("no such metadata field: {key:?}")]
    MissingField { key: String },

    /// Pre-flight validation failed before writing.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// A convenience `Result` type alias using the crate's `GuanoError` type.
pub type Result<T> = std::result::Result<T, GuanoError>;
