//! Batch importer.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span, trace, warn};

use tabsan_ingest::{
    IngestError, data_start_index, load_lines, pad_fields, parse_row, split_lines,
};
use tabsan_model::{Entity, ImportOptions, MIN_COLUMNS, ProcessingResult};
use tabsan_sanitize::DateBounds;

use crate::builder::build_entity;

/// Placeholder logged instead of row values unless value logging is enabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Imports files into classified entities.
#[derive(Debug, Clone, Default)]
pub struct Importer {
    options: ImportOptions,
}

impl Importer {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Imports one file.
    ///
    /// Never fails: a missing, empty or unreadable file yields a result with
    /// no rows and a single processing error.
    pub fn import_file(&self, path: &Path) -> ProcessingResult {
        let span = info_span!("import", path = %path.display());
        let _guard = span.enter();

        match load_lines(path) {
            Ok(lines) => self.import_lines(&lines),
            Err(error) => {
                warn!(%error, "Input file could not be loaded");
                ProcessingResult::failed(error.to_string())
            }
        }
    }

    /// Imports in-memory content with the same rules as [`Self::import_file`].
    pub fn import_str(&self, content: &str) -> ProcessingResult {
        let lines = split_lines(content);
        if lines.is_empty() {
            let error = IngestError::EmptyFile {
                path: PathBuf::from("<memory>"),
            };
            return ProcessingResult::failed(error.to_string());
        }
        self.import_lines(&lines)
    }

    /// Classifies every data line; `lines` includes any header line.
    pub fn import_lines(&self, lines: &[String]) -> ProcessingResult {
        let start = data_start_index(lines, self.options.header_mode);
        if start > 0 {
            debug!("Skipping header line");
        }

        let rows: Vec<(usize, Vec<String>)> = lines[start..]
            .iter()
            .enumerate()
            .map(|(offset, line)| {
                (
                    start + offset + 1,
                    pad_fields(parse_row(line), MIN_COLUMNS),
                )
            })
            .collect();
        self.import_rows(&rows)
    }

    /// Classifies already split rows, each paired with its 1-based file line.
    ///
    /// Rows are not padded here. A row with fewer than [`MIN_COLUMNS`]
    /// fields becomes a line-numbered processing error, still counts towards
    /// `total_processed` and does not stop the batch.
    pub fn import_rows(&self, rows: &[(usize, Vec<String>)]) -> ProcessingResult {
        let bounds = self.date_bounds();
        let mut result = ProcessingResult {
            total_processed: rows.len(),
            ..ProcessingResult::default()
        };

        for (line_number, fields) in rows {
            match build_entity(fields, *line_number, &bounds) {
                Ok(entity) => {
                    self.audit_row(*line_number, &entity);
                    result.classify(entity);
                }
                Err(error) => {
                    warn!(line = error.line(), %error, "Row could not be built");
                    result.processing_errors.push(error.to_string());
                }
            }
        }

        info!(
            total = result.total_processed,
            valid = result.valid_count(),
            invalid = result.invalid_count(),
            processing_errors = result.processing_errors.len(),
            "Import complete"
        );
        result
    }

    fn date_bounds(&self) -> DateBounds {
        match self.options.reference_time {
            Some(reference) => DateBounds::until(reference),
            None => DateBounds::now(),
        }
    }

    /// One audit event per row; values only at trace level and only when
    /// explicitly enabled.
    fn audit_row(&self, line: usize, entity: &Entity) {
        debug!(
            line,
            entity_id = entity.entity_id,
            valid = entity.is_valid(),
            errors = entity.validation_errors.len(),
            "Row processed"
        );
        let date_of_birth = entity
            .date_of_birth
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        trace!(
            line,
            first_name = self.shown(&entity.first_name),
            last_name = self.shown(entity.last_name.as_deref().unwrap_or_default()),
            date_of_birth = self.shown(&date_of_birth),
            gender = self.shown(entity.gender.as_deref().unwrap_or_default()),
            "Row values"
        );
    }

    fn shown<'a>(&self, value: &'a str) -> &'a str {
        if self.options.log_row_values {
            value
        } else {
            REDACTED_VALUE
        }
    }
}

/// Imports `path` with `options`.
pub fn import_csv(path: &Path, options: &ImportOptions) -> ProcessingResult {
    Importer::new(options.clone()).import_file(path)
}
