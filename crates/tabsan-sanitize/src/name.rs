//! Person-name cleanup.

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitized::Sanitized;
use crate::text::truncate_chars;

/// Maximum stored length of a name, in chars.
pub const MAX_NAME_LENGTH: usize = 128;

/// Anything that is not a word char, whitespace, hyphen or apostrophe.
static DISALLOWED_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s\-']").expect("Invalid name filter regex"));

/// Cleans a name field.
///
/// Disallowed characters are stripped and the result is capped at
/// [`MAX_NAME_LENGTH`] chars; truncation is reported but is not a failure.
/// A required field that is blank, or that has nothing left after
/// stripping, yields an empty string and a "required" diagnostic.
pub fn sanitize_name(raw: &str, field: &str, required: bool) -> Sanitized<String> {
    if raw.trim().is_empty() {
        return if required {
            Sanitized::flagged(String::new(), format!("{field} is required"))
        } else {
            Sanitized::clean(String::new())
        };
    }

    let mut diagnostics = Vec::new();
    let mut cleaned = DISALLOWED_NAME_CHARS
        .replace_all(raw.trim(), "")
        .into_owned();

    if let Some(truncated) = truncate_chars(&cleaned, MAX_NAME_LENGTH) {
        cleaned = truncated;
        diagnostics.push(format!(
            "{field} was truncated to {MAX_NAME_LENGTH} characters"
        ));
    }

    if required && cleaned.trim().is_empty() {
        diagnostics.push(format!(
            "{field} is required but contains no valid characters"
        ));
        return Sanitized {
            value: String::new(),
            diagnostics,
        };
    }

    Sanitized {
        value: cleaned,
        diagnostics,
    }
}
