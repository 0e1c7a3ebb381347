use chrono::NaiveTime;
use comfy_table::Table;
use tracing::info;

use tabsan_import::Importer;
use tabsan_model::{Column, HeaderMode, ImportOptions, ProcessingResult};
use tabsan_sanitize::tables::{DATE_FORMATS, GENDER_SYNONYMS, TRUE_TOKENS};

use tabsan_cli::summary::apply_table_style;

use crate::cli::{HeaderArg, ImportArgs};

pub fn run_import(args: &ImportArgs, log_row_values: bool) -> ProcessingResult {
    let options = import_options(args, log_row_values);
    info!(input = %args.input.display(), "Importing records");
    Importer::new(options).import_file(&args.input)
}

pub fn import_options(args: &ImportArgs, log_row_values: bool) -> ImportOptions {
    let header_mode = match args.header {
        HeaderArg::Auto => HeaderMode::Auto,
        HeaderArg::Present => HeaderMode::Present,
        HeaderArg::Absent => HeaderMode::Absent,
    };
    let mut options = ImportOptions::new()
        .with_header_mode(header_mode)
        .with_log_row_values(log_row_values);
    if let Some(date) = args.reference_date {
        options = options.with_reference_time(date.and_time(NaiveTime::MIN));
    }
    options
}

/// Exit status for a finished import.
pub fn exit_code(result: &ProcessingResult, fail_on_invalid: bool) -> i32 {
    if result.has_processing_errors() || (fail_on_invalid && result.invalid_count() > 0) {
        1
    } else {
        0
    }
}

pub fn run_formats() {
    println!("{}", columns_table());

    let mut dates = Table::new();
    dates.set_header(vec!["Order", "Date pattern"]);
    apply_table_style(&mut dates);
    for (position, format) in DATE_FORMATS.iter().enumerate() {
        dates.add_row(vec![(position + 1).to_string(), format.pattern.to_string()]);
    }
    println!("{dates}");

    let mut genders = Table::new();
    genders.set_header(vec!["Gender token", "Canonical label"]);
    apply_table_style(&mut genders);
    for (token, label) in GENDER_SYNONYMS {
        genders.add_row(vec![*token, *label]);
    }
    println!("{genders}");

    println!("True flag tokens: {}", TRUE_TOKENS.join(", "));
}

/// Expected input columns in file order.
fn columns_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Position", "Column", "Label"]);
    apply_table_style(&mut table);
    for column in Column::ALL {
        table.add_row(vec![
            (column.index() + 1).to_string(),
            column.name().to_string(),
            column.label().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_table_lists_layout_in_order() {
        let rendered = columns_table().to_string();
        assert_eq!(columns_table().row_iter().count(), Column::ALL.len());

        let first = rendered.find("entity_id").unwrap();
        let last = rendered.find("entity_gender").unwrap();
        assert!(first < last);
        assert!(rendered.contains("Date of birth"));
    }
}
