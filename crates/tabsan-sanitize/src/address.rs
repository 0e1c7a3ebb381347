use crate::text::truncate_chars;

/// Maximum stored length of an address, in chars.
pub const MAX_ADDRESS_LENGTH: usize = 512;

/// Trims an address and silently caps it at [`MAX_ADDRESS_LENGTH`] chars.
pub fn sanitize_address(raw: &str) -> Option<String> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(truncate_chars(cleaned, MAX_ADDRESS_LENGTH).unwrap_or_else(|| cleaned.to_string()))
}
