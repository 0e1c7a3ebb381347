use crate::sanitized::Sanitized;
use crate::tables::canonical_gender;
use crate::text::truncate_chars;

/// Maximum length of an unrecognized gender value, in chars.
pub const MAX_GENDER_LENGTH: usize = 16;

/// Maps known gender tokens to a canonical label.
///
/// Unrecognized values are kept as written; only values longer than
/// [`MAX_GENDER_LENGTH`] are cut and reported.
pub fn sanitize_gender(raw: &str) -> Sanitized<Option<String>> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Sanitized::clean(None);
    }

    if let Some(label) = canonical_gender(&cleaned.to_lowercase()) {
        return Sanitized::clean(Some(label.to_string()));
    }

    match truncate_chars(cleaned, MAX_GENDER_LENGTH) {
        Some(truncated) => Sanitized::flagged(
            Some(truncated),
            format!("Gender field too long, truncated: '{cleaned}'"),
        ),
        None => Sanitized::clean(Some(cleaned.to_string())),
    }
}
