//! Error types for the graph-pptx library.

use std::io;
use thiserror::Error;

/// Result type alias for graph-pptx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting a graph from a presentation.
///
/// Only the first three variants are produced by the extraction pipeline
/// itself. Per-element shortfalls (missing ids, unknown shapes) are never
/// reported as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path is missing, unreadable, or not a ZIP archive.
    #[error("Cannot open container: {0}")]
    ContainerOpen(String),

    /// The target entry is listed in the archive but cannot be read.
    #[error("Cannot open entry: {0}")]
    EntryOpen(String),

    /// The target entry is not well-formed XML.
    #[error("XML parse error: {0}")]
    DocumentParse(String),

    /// A structural query expression could not be compiled.
    #[error("Invalid query `{expression}`: {reason}")]
    Query {
        /// The offending expression
        expression: String,
        /// Why it was rejected
        reason: String,
    },

    /// I/O error outside of container access (e.g. writing output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ContainerOpen(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::DocumentParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ContainerOpen("missing.pptx: not found".to_string());
        assert_eq!(err.to_string(), "Cannot open container: missing.pptx: not found");

        let err = Error::Query {
            expression: "a//b".to_string(),
            reason: "empty step".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid query `a//b`: empty step");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_zip() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::ContainerOpen(_)));
    }
}
