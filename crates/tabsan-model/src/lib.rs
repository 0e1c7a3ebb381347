//! Data model for tabular record sanitization.
//!
//! # Module Organization
//!
//! - [`column`]: Positional column layout of the input file
//! - [`entity`]: One sanitized record and its validation errors
//! - [`result`]: Aggregated outcome of importing one file
//! - [`options`]: Import configuration

pub mod column;
pub mod entity;
pub mod options;
pub mod result;

pub use column::{Column, MIN_COLUMNS};
pub use entity::Entity;
pub use options::{HeaderMode, ImportOptions};
pub use result::{ErrorFrequency, ProcessingResult};
