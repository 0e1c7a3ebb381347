//! Entity construction from one parsed row.

use tabsan_model::{Column, Entity, MIN_COLUMNS};
use tabsan_sanitize::{
    DateBounds, parse_boolean, parse_date_of_birth, parse_entity_id, sanitize_address,
    sanitize_gender, sanitize_name,
};

use crate::error::RowError;

/// Builds an entity from a padded field row.
///
/// Every column is sanitized even when earlier ones fail, so the entity is
/// always fully populated and carries the diagnostics of all columns in
/// column order. Columns past the eighth are ignored.
pub fn build_entity(
    fields: &[String],
    line_number: usize,
    bounds: &DateBounds,
) -> Result<Entity, RowError> {
    if fields.len() < MIN_COLUMNS {
        return Err(RowError::MissingColumns {
            line: line_number,
            found: fields.len(),
            expected: MIN_COLUMNS,
        });
    }
    let field = |column: Column| fields[column.index()].as_str();

    let mut errors = Vec::new();
    let entity_id = parse_entity_id(field(Column::EntityId)).merge_into(&mut errors);
    let first_name = sanitize_name(
        field(Column::FirstName),
        Column::FirstName.label(),
        true,
    )
    .merge_into(&mut errors);
    let middle_name = optional_name(field(Column::MiddleName), Column::MiddleName, &mut errors);
    let last_name = optional_name(field(Column::LastName), Column::LastName, &mut errors);
    let date_of_birth =
        parse_date_of_birth(field(Column::DateOfBirth), bounds).merge_into(&mut errors);
    let is_master = parse_boolean(field(Column::IsMaster));
    let address = sanitize_address(field(Column::Address));
    let gender = sanitize_gender(field(Column::Gender)).merge_into(&mut errors);

    Ok(Entity {
        entity_id,
        first_name,
        middle_name,
        last_name,
        date_of_birth,
        is_master,
        address,
        gender,
        validation_errors: errors,
    })
}

fn optional_name(raw: &str, column: Column, errors: &mut Vec<String>) -> Option<String> {
    let cleaned = sanitize_name(raw, column.label(), false).merge_into(errors);
    if cleaned.trim().is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
