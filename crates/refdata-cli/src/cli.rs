//! CLI argument definitions for the reference data builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "refdata",
    version,
    about = "Reference data builder - aggregate countries, currencies, locales and regions",
    long_about = "Aggregate cleansed reference tables into one consistent dataset.\n\n\
                  Reads the cleansed country, currency, language, number-format and\n\
                  timezone tables and writes countries, currencies, languages, locales,\n\
                  regions, provinces, timezones, continents and currency formats as JSON."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Aggregate the cleansed tables and write the final dataset.
    Build(BuildArgs),

    /// List the input tables the builder reads.
    Tables,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory holding the cleansed tables (default: $REFDATA_DATA_DIR/cleansed).
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Output directory for the JSON files (default: $REFDATA_DATA_DIR/final).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Fail when a currency has no primary symbol.
    #[arg(long = "strict-symbols")]
    pub strict_symbols: bool,

    /// Let the last duty row win when a country has several.
    ///
    /// By default conflicting duty rows for one country abort the build.
    #[arg(long = "duty-last-wins")]
    pub duty_last_wins: bool,

    /// Aggregate and render without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
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
