use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// How often a validation message occurred across invalid entities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorFrequency {
    pub message: String,
    pub count: usize,
}

/// Outcome of importing one file.
///
/// `processing_errors` holds file- and line-level failures; they are never
/// attached to an [`Entity`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub valid_entities: Vec<Entity>,
    pub invalid_entities: Vec<Entity>,
    /// Number of data rows seen, header excluded.
    pub total_processed: usize,
    pub processing_errors: Vec<String>,
}

impl ProcessingResult {
    /// Result carrying a single processing error and no rows.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            processing_errors: vec![message.into()],
            ..Self::default()
        }
    }

    /// Files an entity into the valid or invalid bucket.
    pub fn classify(&mut self, entity: Entity) {
        if entity.is_valid() {
            self.valid_entities.push(entity);
        } else {
            self.invalid_entities.push(entity);
        }
    }

    pub fn valid_count(&self) -> usize {
        self.valid_entities.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid_entities.len()
    }

    pub fn has_processing_errors(&self) -> bool {
        !self.processing_errors.is_empty()
    }

    /// Percentage of processed rows that were valid; `0.0` for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total_processed == 0 {
            return 0.0;
        }
        self.valid_count() as f64 / self.total_processed as f64 * 100.0
    }

    /// Most frequent validation messages, most common first.
    ///
    /// Messages are grouped by exact text. Equal counts keep the order in
    /// which the message was first seen.
    pub fn top_validation_errors(&self, limit: usize) -> Vec<ErrorFrequency> {
        let mut frequencies: Vec<ErrorFrequency> = Vec::new();
        for message in self
            .invalid_entities
            .iter()
            .flat_map(|entity| entity.validation_errors.iter())
        {
            match frequencies.iter_mut().find(|f| &f.message == message) {
                Some(existing) => existing.count += 1,
                None => frequencies.push(ErrorFrequency {
                    message: message.clone(),
                    count: 1,
                }),
            }
        }
        // sort_by is stable, so ties stay in first-seen order
        frequencies.sort_by(|a, b| b.count.cmp(&a.count));
        frequencies.truncate(limit);
        frequencies
    }
}
