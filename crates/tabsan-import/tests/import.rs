//! End-to-end tests for the batch importer.

use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use tabsan_import::{Importer, import_csv};
use tabsan_model::{HeaderMode, ImportOptions, ProcessingResult};
use tempfile::NamedTempFile;

fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn options() -> ImportOptions {
    ImportOptions::new().with_reference_time(reference())
}

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn assert_counts_balance(result: &ProcessingResult) {
    assert_eq!(
        result.total_processed,
        result.valid_count() + result.invalid_count()
    );
    for entity in &result.valid_entities {
        assert!(entity.validation_errors.is_empty());
    }
    for entity in &result.invalid_entities {
        assert!(!entity.validation_errors.is_empty());
    }
}

const MIXED_CSV: &str = "\
entity_id,first_name,middle_name,last_name,dob,is_master,address,gender
1,Jane,Q,Public,1985-04-12,yes,\"10 Downing St, London\",female
-4,,,Nobody,,no,,m
";

#[test]
fn header_valid_and_invalid_rows() {
    let file = create_temp_csv(MIXED_CSV);
    let result = import_csv(file.path(), &options());

    assert!(result.processing_errors.is_empty());
    assert_eq!(result.total_processed, 2);
    assert_eq!(result.valid_count(), 1);
    assert_eq!(result.invalid_count(), 1);
    assert_counts_balance(&result);

    let valid = &result.valid_entities[0];
    assert_eq!(valid.entity_id, 1);
    assert_eq!(valid.middle_name.as_deref(), Some("Q"));
    assert_eq!(valid.address.as_deref(), Some("10 Downing St, London"));
    assert_eq!(valid.gender.as_deref(), Some("Female"));
    assert!(valid.is_master);

    let invalid = &result.invalid_entities[0];
    assert_eq!(invalid.entity_id, 0);
    assert!(
        invalid
            .validation_errors
            .iter()
            .any(|e| e.contains("required"))
    );
    assert!(
        invalid
            .validation_errors
            .iter()
            .any(|e| e == "Entity ID must be > 0")
    );
    assert_eq!(invalid.last_name.as_deref(), Some("Nobody"));
    assert_eq!(invalid.gender.as_deref(), Some("Male"));
}

#[test]
fn missing_file_is_single_processing_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");
    let result = import_csv(&path, &options());

    assert_eq!(
        result.processing_errors,
        vec![format!("csv file not found: {}", path.display())]
    );
    assert_eq!(result.total_processed, 0);
    assert!(result.valid_entities.is_empty());
    assert!(result.invalid_entities.is_empty());
}

#[test]
fn empty_file_is_single_processing_error() {
    let file = create_temp_csv("");
    let result = import_csv(file.path(), &options());
    assert_eq!(result.processing_errors, vec!["csv file is empty"]);
}

#[test]
fn invalid_utf8_is_read_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[b'1', b',', 0xFF, b'\n']).unwrap();
    let result = import_csv(file.path(), &options());

    assert_eq!(result.processing_errors.len(), 1);
    assert!(result.processing_errors[0].starts_with("Error reading csv file:"));
}

#[test]
fn short_rows_are_padded() {
    let file = create_temp_csv("7,Solo\n");
    let result = import_csv(file.path(), &options());

    assert_eq!(result.total_processed, 1);
    assert_eq!(result.valid_count(), 1);
    let entity = &result.valid_entities[0];
    assert_eq!(entity.last_name, None);
    assert_eq!(entity.date_of_birth, None);
    assert!(!entity.is_master);
}

#[test]
fn date_upper_bound_uses_reference_time() {
    let file = create_temp_csv("1,Ann,,,2025-01-15\n2,Bob,,,2025-01-16\n");
    let result = import_csv(file.path(), &options());

    assert_eq!(result.valid_count(), 1);
    assert_eq!(result.invalid_count(), 1);
    assert_eq!(
        result.invalid_entities[0].validation_errors,
        vec!["Date of birth is outside valid range: 2025-01-16"]
    );
}

#[test]
fn repeated_imports_are_identical() {
    let content = "\
entity_id,first_name
0,Zed
abc,Amy,,,01/02/2020
5,  O'Brien123!!,,,13.13.2000,,,Martian
";
    let file = create_temp_csv(content);
    let first = import_csv(file.path(), &options());
    let second = import_csv(file.path(), &options());

    assert_eq!(first, second);
    assert_counts_balance(&first);
    assert_eq!(first.total_processed, 3);
}

#[test]
fn import_str_matches_import_file() {
    let file = create_temp_csv(MIXED_CSV);
    let importer = Importer::new(options());
    assert_eq!(importer.import_file(file.path()), importer.import_str(MIXED_CSV));
}

#[test]
fn header_mode_absent_treats_header_as_data() {
    let file = create_temp_csv(MIXED_CSV);
    let result = import_csv(
        file.path(),
        &options().with_header_mode(HeaderMode::Absent),
    );

    assert_eq!(result.total_processed, 3);
    assert_eq!(result.invalid_count(), 2);
    assert!(
        result.invalid_entities[0]
            .validation_errors
            .contains(&"Invalid Entity ID format: 'entity_id'".to_string())
    );
}

#[test]
fn top_errors_across_rows() {
    let content = "0,A\n0,B\n-1,\n";
    let result = Importer::new(options()).import_str(content);
    let top = result.top_validation_errors(5);

    assert_eq!(top[0].message, "Entity ID must be > 0");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[1].message, "First Name is required");
    assert_eq!(top[1].count, 1);
}
