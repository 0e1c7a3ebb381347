//! Configuration options for record import.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// How the first line of an input file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Detect a header by matching known column-name tokens.
    #[default]
    Auto,
    /// The first line is always a header.
    Present,
    /// Every line is data.
    Absent,
}

/// Options controlling a single import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Header handling for the first line.
    pub header_mode: HeaderMode,

    /// Upper bound for dates of birth.
    ///
    /// `None` uses the local clock at the start of the import. Pin it to get
    /// identical output for identical input.
    pub reference_time: Option<NaiveDateTime>,

    /// Include row values (names, dates) in trace-level audit events.
    /// Default: false, values are redacted.
    pub log_row_values: bool,
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header_mode(mut self, mode: HeaderMode) -> Self {
        self.header_mode = mode;
        self
    }

    #[must_use]
    pub fn with_reference_time(mut self, reference: NaiveDateTime) -> Self {
        self.reference_time = Some(reference);
        self
    }

    #[must_use]
    pub fn with_log_row_values(mut self, enable: bool) -> Self {
        self.log_row_values = enable;
        self
    }
}
