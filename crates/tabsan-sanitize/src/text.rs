/// Returns the first `max` chars of `value` when it is longer than that.
pub(crate) fn truncate_chars(value: &str, max: usize) -> Option<String> {
    value
        .char_indices()
        .nth(max)
        .map(|(byte_index, _)| value[..byte_index].to_string())
}
