use thiserror::Error;

/// A data line that could not be turned into an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// Fewer fields than the column layout needs. Rows are padded before
    /// building, so this points at a caller that skipped padding.
    #[error("error at line {line}: row has {found} fields, expected at least {expected}")]
    MissingColumns {
        line: usize,
        found: usize,
        expected: usize,
    },
}

impl RowError {
    /// 1-based line number in the input file.
    pub fn line(&self) -> usize {
        match self {
            RowError::MissingColumns { line, .. } => *line,
        }
    }
}
