//! Error types for authorlink library.
//!
//! The normalizer itself is total; these errors only arise at the edges
//! (reading files, decoding bytes, serializing output).

use std::io;
use thiserror::Error;

/// Result type alias for authorlink operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for authorlink library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Text encoding error: {0}")]
    Encoding(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Link style name not recognized.
    #[error("Unknown link style: {0} (expected bracket, wiki or plain)")]
    UnknownStyle(String),

    /// Invalid argument passed across a binding boundary.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
