//! Error types for plainconf
//!
//! The error surface is a small closed enum. Callers branch on
//! [`Error::KeyNotFound`] vs [`Error::ParseValue`] to tell a missing key
//! apart from a malformed value; structural and I/O failures abort a read.

use std::io;

/// Result type alias for plainconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reading configurations and converting values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The queried key does not exist in the configuration
    #[error("key not found")]
    KeyNotFound,

    /// The value exists but could not be converted to the requested type
    #[error("failed to parse value into given type: {0}")]
    ParseValue(String),

    /// A line matched none of comment, blank, key/value, or section marker.
    /// `line` is 1-based and `text` is the trimmed offending line.
    #[error("unrecognized input at line {line}: {text}")]
    Unrecognized { line: usize, text: String },

    /// Failure reading the underlying stream, unrelated to its content
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// True if this error reports a missing key
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound)
    }

    /// True if this error came from a failed value conversion
    pub fn is_parse_value(&self) -> bool {
        matches!(self, Error::ParseValue(_))
    }
}
