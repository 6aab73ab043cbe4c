//! Error types for plotspec operations.
//!
//! Composition and sealing are total and never fail; errors can only occur at
//! the export boundary when a specification is serialized or written out.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when exporting a plot specification.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing a specification file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("Specification serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
