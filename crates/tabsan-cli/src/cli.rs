//! CLI argument definitions for tabsan.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabsan",
    version,
    about = "Sanitize and validate tabular person records",
    long_about = "Import a CSV file of person records, clean every field and\n\
                  split the rows into valid and invalid records with the\n\
                  reasons each invalid row was rejected."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v info, -vv debug, -vvv trace, -q errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include row values (names, dates) in trace-level logs.
    ///
    /// Off by default; values are logged as [REDACTED].
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import a CSV file and report valid and invalid records.
    Import(ImportArgs),

    /// List the column layout, accepted date patterns and gender synonyms.
    Formats,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// How to treat the first line.
    #[arg(long = "header", value_enum, default_value = "auto")]
    pub header: HeaderArg,

    /// Latest accepted date of birth (YYYY-MM-DD, default: now).
    ///
    /// Pin this to get identical output across runs.
    #[arg(long = "reference-date", value_name = "DATE")]
    pub reference_date: Option<NaiveDate>,

    /// Print a table of invalid records and their errors.
    #[arg(long = "show-invalid")]
    pub show_invalid: bool,

    /// Print plain text instead of tables.
    #[arg(long = "plain")]
    pub plain: bool,

    /// Exit with status 1 when any record is invalid.
    #[arg(long = "fail-on-invalid")]
    pub fail_on_invalid: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum HeaderArg {
    Auto,
    Present,
    Absent,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
