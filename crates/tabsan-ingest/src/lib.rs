//! Record ingestion utilities.
//!
//! This crate turns a delimited text file into padded field rows ready for
//! record building.
//!
//! # Features
//!
//! - **File Loading**: Read UTF-8 text with BOM handling and clear failures
//! - **Header Detection**: Heuristic or forced first-line header handling
//! - **Row Parsing**: Tolerant quote-aware field splitting with padding
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabsan_ingest::{load_lines, data_start_index, parse_row, pad_fields};
//! use tabsan_model::{HeaderMode, MIN_COLUMNS};
//!
//! let lines = load_lines(Path::new("people.csv"))?;
//! let start = data_start_index(&lines, HeaderMode::Auto);
//! for line in &lines[start..] {
//!     let fields = pad_fields(parse_row(line), MIN_COLUMNS);
//! }
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    HEADER_TOKENS, data_start_index, load_lines, looks_like_header, pad_fields, parse_row,
    split_lines,
};
