//! Positional column layout.

use serde::{Deserialize, Serialize};

/// Minimum number of fields every parsed row is padded to.
pub const MIN_COLUMNS: usize = 8;

/// Input columns in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    EntityId,
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    IsMaster,
    Address,
    Gender,
}

impl Column {
    /// All columns in positional order.
    pub const ALL: [Column; MIN_COLUMNS] = [
        Column::EntityId,
        Column::FirstName,
        Column::MiddleName,
        Column::LastName,
        Column::DateOfBirth,
        Column::IsMaster,
        Column::Address,
        Column::Gender,
    ];

    /// Zero-based field index in a parsed row.
    pub fn index(self) -> usize {
        match self {
            Column::EntityId => 0,
            Column::FirstName => 1,
            Column::MiddleName => 2,
            Column::LastName => 3,
            Column::DateOfBirth => 4,
            Column::IsMaster => 5,
            Column::Address => 6,
            Column::Gender => 7,
        }
    }

    /// Column name as written in a header row.
    pub fn name(self) -> &'static str {
        match self {
            Column::EntityId => "entity_id",
            Column::FirstName => "entity_first_name",
            Column::MiddleName => "entity_middle_name",
            Column::LastName => "entity_last_name",
            Column::DateOfBirth => "entity_dob",
            Column::IsMaster => "is_master",
            Column::Address => "address",
            Column::Gender => "entity_gender",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Column::EntityId => "Entity ID",
            Column::FirstName => "First Name",
            Column::MiddleName => "Middle Name",
            Column::LastName => "Last Name",
            Column::DateOfBirth => "Date of birth",
            Column::IsMaster => "Master flag",
            Column::Address => "Address",
            Column::Gender => "Gender",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (position, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
        }
    }
}
