//! Header row detection.

use tabsan_model::HeaderMode;

/// Lower-case column-name fragments that mark a header line.
pub const HEADER_TOKENS: &[&str] = &["entity_id", "first_name", "last_name", "name"];

/// Heuristic: does the line contain any known column-name token?
///
/// Matching is a case-insensitive substring test, so a data row holding a
/// value such as `Name` is also taken for a header.
pub fn looks_like_header(line: &str) -> bool {
    let lowered = line.to_lowercase();
    HEADER_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Index of the first data line.
pub fn data_start_index(lines: &[String], mode: HeaderMode) -> usize {
    let has_header = match mode {
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
        HeaderMode::Auto => lines.first().is_some_and(|line| looks_like_header(line)),
    };
    if has_header { lines.len().min(1) } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_looks_like_header() {
        assert!(looks_like_header("entity_id,first_name,last_name"));
        assert!(looks_like_header("ID,Entity_First_Name,Surname"));
        assert!(looks_like_header("id,NAME"));
        assert!(!looks_like_header("1,Ann,,Lee,1990-01-01,yes,,F"));
    }

    #[test]
    fn test_data_start_auto() {
        assert_eq!(data_start_index(&lines(&["entity_id,name", "1,Ann"]), HeaderMode::Auto), 1);
        assert_eq!(data_start_index(&lines(&["1,Ann", "2,Bob"]), HeaderMode::Auto), 0);
        assert_eq!(data_start_index(&[], HeaderMode::Auto), 0);
    }

    #[test]
    fn test_data_start_forced() {
        let data = lines(&["1,Ann", "2,Bob"]);
        assert_eq!(data_start_index(&data, HeaderMode::Present), 1);
        assert_eq!(
            data_start_index(&lines(&["entity_id", "1"]), HeaderMode::Absent),
            0
        );
        assert_eq!(data_start_index(&[], HeaderMode::Present), 0);
    }
}
