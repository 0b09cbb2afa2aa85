use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ModelError;

/// Errors that can occur reading or writing a VitaSync document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be opened, read or written.
    #[error("I/O error for {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    /// The text is not valid JSON or lacks a required field.
    #[error("Failed to parse document: {0}")]
    Parse(#[source] serde_json::Error),

    /// A workout date is not a valid ISO-8601 calendar date.
    #[error("Invalid workout date '{0}': {1}")]
    InvalidDate(String, #[source] chrono::ParseError),

    /// A value in the document violates a model invariant.
    #[error("Invalid value in document: {0}")]
    InvalidValue(#[from] ModelError),

    #[error("Failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Encoded document is not valid UTF-8: {0}")]
    NotUtf8(#[source] std::string::FromUtf8Error),
}
