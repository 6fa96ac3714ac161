//! Error types for unhtml library.

use std::io;
use thiserror::Error;

use crate::model::ObjectKind;

/// Result type alias for unhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading documents or looking up objects.
///
/// Extraction itself never fails: elements that do not qualify as tables,
/// lists, or definition lists are skipped without an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No object with the requested name exists in the document.
    #[error("Object '{0}' does not exist in the document")]
    NotFound(String),

    /// The name resolves to an object of a different kind.
    #[error("Object '{name}' is a {found}, not a {expected}")]
    WrongKind {
        name: String,
        expected: ObjectKind,
        found: ObjectKind,
    },

    /// A definition list has no group at the requested index.
    #[error("Definition list '{name}' has no group {index} (it has {len} groups)")]
    IndexOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },

    /// Error during rendering (Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
