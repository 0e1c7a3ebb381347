use crate::tables::TRUE_TOKENS;

/// Best-effort flag normalization. Anything outside
/// [`TRUE_TOKENS`](crate::tables::TRUE_TOKENS), blank included, is `false`.
pub fn parse_boolean(raw: &str) -> bool {
    let token = raw.trim().to_lowercase();
    TRUE_TOKENS.contains(&token.as_str())
}
