//! Batch import of tabular records.
//!
//! Drives the row parser and field sanitizers over every data line of an
//! input file and sorts the resulting entities into valid and invalid
//! buckets of a [`ProcessingResult`](tabsan_model::ProcessingResult).
//!
//! Two kinds of problems are kept apart:
//!
//! - **Validation errors** live on each [`Entity`](tabsan_model::Entity)
//!   and make it invalid without stopping the batch.
//! - **Processing errors** (missing file, unreadable content, rows that
//!   could not be built) live on the result itself.

mod builder;
mod error;
mod importer;

pub use builder::build_entity;
pub use error::RowError;
pub use importer::{Importer, REDACTED_VALUE, import_csv};
