//! Input file loading.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads a whole input file into lines.
///
/// The content must be UTF-8; a leading UTF-8 byte-order mark is dropped
/// and UTF-16 byte-order marks are rejected. A file without any line is an
/// [`IngestError::EmptyFile`].
pub fn load_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    // Check for UTF-16 BOM (not supported)
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })?;

    let lines = split_lines(&content);
    if lines.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        lines = lines.len(),
        "Loaded input file"
    );
    Ok(lines)
}

/// Splits text into lines on `\r\n`, `\r` or `\n`, dropping a leading BOM.
///
/// A trailing line terminator does not produce an extra empty line.
pub fn split_lines(content: &str) -> Vec<String> {
    let mut rest = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = Vec::new();
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest.to_string());
            break;
        };
        lines.push(rest[..end].to_string());
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    lines
}
