//! CSV reading utilities.

mod header;
mod reader;
mod row;

pub use header::{HEADER_TOKENS, data_start_index, looks_like_header};
pub use reader::{load_lines, split_lines};
pub use row::{pad_fields, parse_row};
