//! Console rendering of an import result.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tabsan_model::{Entity, ProcessingResult};

/// Number of distinct validation messages listed in the summary.
pub const TOP_ISSUES: usize = 5;

/// Plain-text summary, one item per line.
pub fn render_plain(result: &ProcessingResult) -> String {
    let mut lines = vec![
        "Processing Results:".to_string(),
        format!("- Total records processed: {}", result.total_processed),
        format!("- Valid records: {}", result.valid_count()),
        format!("- Invalid records: {}", result.invalid_count()),
    ];
    if result.total_processed > 0 {
        lines.push(format!("- Success rate: {:.1}%", result.success_rate()));
    }
    if result.has_processing_errors() {
        lines.push(String::new());
        lines.push("Processing Errors:".to_string());
        lines.extend(result.processing_errors.iter().map(|e| format!("- {e}")));
    }
    let issues = result.top_validation_errors(TOP_ISSUES);
    if !issues.is_empty() {
        lines.push(String::new());
        lines.push("Validation Issues Found:".to_string());
        lines.extend(
            issues
                .iter()
                .map(|issue| format!("- {} ({} occurrences)", issue.message, issue.count)),
        );
    }
    lines.join("\n")
}

/// Totals table.
pub fn totals_table(result: &ProcessingResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Total records processed"),
        Cell::new(result.total_processed),
    ]);
    table.add_row(vec![
        Cell::new("Valid records"),
        count_cell(result.valid_count(), Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Invalid records"),
        count_cell(result.invalid_count(), Color::Red),
    ]);
    let rate = if result.total_processed > 0 {
        Cell::new(format!("{:.1}%", result.success_rate())).add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    };
    table.add_row(vec![Cell::new("Success rate"), rate]);
    table
}

/// Most frequent validation messages, or `None` when every record is valid.
pub fn issues_table(result: &ProcessingResult) -> Option<Table> {
    let issues = result.top_validation_errors(TOP_ISSUES);
    if issues.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Validation issue"), header_cell("Occurrences")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.message),
            count_cell(issue.count, Color::Yellow),
        ]);
    }
    Some(table)
}

/// One row per invalid record with its joined errors.
pub fn invalid_table(entities: &[Entity]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("First Name"),
        header_cell("Last Name"),
        header_cell("Date of Birth"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for entity in entities {
        table.add_row(vec![
            Cell::new(entity.entity_id),
            Cell::new(&entity.first_name),
            optional_cell(entity.last_name.as_deref()),
            optional_cell(
                entity
                    .date_of_birth
                    .map(|date| date.format("%Y-%m-%d").to_string())
                    .as_deref(),
            ),
            Cell::new(entity.joined_errors()).fg(Color::Red),
        ]);
    }
    table
}

pub fn print_summary(result: &ProcessingResult, plain: bool, show_invalid: bool) {
    if plain {
        println!("{}", render_plain(result));
        if show_invalid {
            for entity in &result.invalid_entities {
                println!("{}: {}", entity.entity_id, entity.joined_errors());
            }
        }
    } else {
        println!("{}", totals_table(result));
        if let Some(table) = issues_table(result) {
            println!();
            println!("Validation issues:");
            println!("{table}");
        }
        if show_invalid && !result.invalid_entities.is_empty() {
            println!();
            println!("Invalid records:");
            println!("{}", invalid_table(&result.invalid_entities));
        }
    }
    if !plain && result.has_processing_errors() {
        eprintln!("Processing errors:");
        for error in &result.processing_errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .add_attribute(Attribute::Bold)
        .fg(Color::Cyan)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
