//! Row tokenizing.

/// Splits one line into trimmed fields.
///
/// A `"` toggles the in-quotes state and is dropped; commas inside quotes do
/// not split. Malformed quoting is tolerated: an unterminated quote simply
/// runs to the end of the line.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    // Don't forget the last field
    fields.push(current.trim().to_string());
    fields
}

/// Pads `fields` with empty strings up to `min` entries.
pub fn pad_fields(mut fields: Vec<String>, min: usize) -> Vec<String> {
    if fields.len() < min {
        fields.resize(min, String::new());
    }
    fields
}
