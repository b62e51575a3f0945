//! Error types for the textcat library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TextcatError`] enum. The three domain failures are:
//!
//! - [`TextcatError::CorpusParse`] - the corpus source is malformed or unreadable
//! - [`TextcatError::Configuration`] - a normalization rule or config file is invalid
//! - [`TextcatError::Serialization`] - an export (vocabulary, training set) failed
//!
//! # Examples
//!
//! ```
//! use textcat::error::{Result, TextcatError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TextcatError::configuration("capture group 3 out of range"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for textcat operations.
#[derive(Error, Debug)]
pub enum TextcatError {
    /// I/O errors outside of corpus loading and exports.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed or unreadable corpus source.
    #[error("Corpus parse error: {0}")]
    CorpusParse(String),

    /// Invalid normalization rule or pipeline configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Vocabulary or training set export failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid argument passed to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by external collaborators such as classifiers.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TextcatError.
pub type Result<T> = std::result::Result<T, TextcatError>;

impl TextcatError {
    /// Create a new corpus parse error.
    pub fn corpus_parse<S: Into<String>>(msg: S) -> Self {
        TextcatError::CorpusParse(msg.into())
    }

    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        TextcatError::Configuration(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        TextcatError::Serialization(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TextcatError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextcatError::corpus_parse("line 3: expected 2 fields, found 1");
        assert_eq!(
            err.to_string(),
            "Corpus parse error: line 3: expected 2 fields, found 1"
        );

        let err = TextcatError::configuration("bad rule");
        assert_eq!(err.to_string(), "Configuration error: bad rule");

        let err = TextcatError::serialization("disk full");
        assert_eq!(err.to_string(), "Serialization error: disk full");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: TextcatError = io_err.into();
        assert!(matches!(err, TextcatError::Io(_)));
    }
}
