//! Tests for console summary rendering.

use tabsan_cli::summary::{invalid_table, issues_table, render_plain, totals_table};
use tabsan_model::{Entity, ProcessingResult};

fn invalid(id: i32, errors: &[&str]) -> Entity {
    Entity {
        entity_id: id,
        validation_errors: errors.iter().map(|e| (*e).to_string()).collect(),
        ..Entity::default()
    }
}

fn sample_result() -> ProcessingResult {
    let mut result = ProcessingResult {
        total_processed: 3,
        ..ProcessingResult::default()
    };
    result.classify(Entity {
        entity_id: 1,
        first_name: "Ann".to_string(),
        ..Entity::default()
    });
    result.classify(invalid(0, &["Entity ID must be > 0", "First Name is required"]));
    result.classify(invalid(4, &["Entity ID must be > 0"]));
    result
}

#[test]
fn plain_summary() {
    insta::assert_snapshot!(render_plain(&sample_result()), @r"
    Processing Results:
    - Total records processed: 3
    - Valid records: 1
    - Invalid records: 2
    - Success rate: 33.3%

    Validation Issues Found:
    - Entity ID must be > 0 (2 occurrences)
    - First Name is required (1 occurrences)
    ");
}

#[test]
fn plain_summary_with_processing_error() {
    let result = ProcessingResult::failed("csv file is empty");
    insta::assert_snapshot!(render_plain(&result), @r"
    Processing Results:
    - Total records processed: 0
    - Valid records: 0
    - Invalid records: 0

    Processing Errors:
    - csv file is empty
    ");
}

#[test]
fn tables_contain_counts_and_messages() {
    let result = sample_result();

    let totals = totals_table(&result).to_string();
    assert!(totals.contains("Total records processed"));
    assert!(totals.contains("33.3%"));

    let issues = issues_table(&result).expect("issues present").to_string();
    assert!(issues.contains("Entity ID must be > 0"));

    let invalid = invalid_table(&result.invalid_entities).to_string();
    assert!(invalid.contains("First Name is required"));
}

#[test]
fn no_issues_table_when_all_valid() {
    let mut result = ProcessingResult {
        total_processed: 1,
        ..ProcessingResult::default()
    };
    result.classify(Entity {
        entity_id: 9,
        first_name: "Bo".to_string(),
        ..Entity::default()
    });
    assert!(issues_table(&result).is_none());
}
