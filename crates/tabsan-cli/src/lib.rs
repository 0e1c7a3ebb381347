//! CLI library components for tabsan.

pub mod logging;
pub mod summary;
