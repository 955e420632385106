//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "xfer",
    version,
    about = "Check contract-transfer CSV exports before import",
    long_about = "Check contract-transfer CSV exports before import.\n\n\
                  Maps the spreadsheet headers to canonical fields, looks up serial\n\
                  numbers that are already registered, and validates dates and\n\
                  transfer timing. Every row gets a validation result."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV export and report the result of every row.
    Check(CheckArgs),

    /// Print the effective header mapping.
    Headers(HeadersArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// CSV export to check (UTF-8).
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// TOML configuration file.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON array of already registered records to check serial numbers against.
    #[arg(long = "registered", value_name = "FILE")]
    pub registered: Option<PathBuf>,

    /// Record collection to search (overrides the config file).
    #[arg(long = "collection", value_name = "NAME")]
    pub collection: Option<String>,

    /// Maximum concurrent record lookups; 0 for no limit.
    #[arg(long = "max-in-flight", value_name = "N")]
    pub max_in_flight: Option<usize>,

    /// Report printed to stdout; `json` includes the typed issues per row.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Also write the annotated rows as JSON to this file.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// TOML configuration file whose `[headers]` are applied.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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
