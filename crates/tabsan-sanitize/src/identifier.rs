use crate::sanitized::Sanitized;

/// Parses the required positive identifier.
///
/// Every failure returns the sentinel `0`, which is never a valid id.
pub fn parse_entity_id(raw: &str) -> Sanitized<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Sanitized::flagged(0, "Entity ID is required");
    }

    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => Sanitized::clean(id),
        Ok(_) => Sanitized::flagged(0, "Entity ID must be > 0"),
        Err(_) => Sanitized::flagged(0, format!("Invalid Entity ID format: '{raw}'")),
    }
}
