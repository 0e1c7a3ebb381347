//! Error types for record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an input file.
///
/// The `Display` text is what ends up in a result's processing errors.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("csv file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Input file has no lines.
    #[error("csv file is empty")]
    EmptyFile { path: PathBuf },

    /// Failed to read the file.
    #[error("Error reading csv file: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error("Error reading csv file: invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },

    /// File starts with a byte-order mark for an unsupported encoding.
    #[error("Error reading csv file: unsupported encoding {encoding}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
