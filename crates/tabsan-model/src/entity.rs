use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sanitized record built from a single data line.
///
/// Fields hold the cleaned values; anything that could not be cleaned is
/// reported in `validation_errors` instead. Validity is derived from that
/// list and never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Positive identifier, or `0` when the source value was rejected.
    pub entity_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub is_master: bool,
    pub address: Option<String>,
    pub gender: Option<String>,
    /// Field-level diagnostics in column order.
    pub validation_errors: Vec<String>,
}

impl Entity {
    /// True when no field produced a validation error.
    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty()
    }

    /// Validation errors joined for single-cell display.
    pub fn joined_errors(&self) -> String {
        self.validation_errors.join("; ")
    }
}
