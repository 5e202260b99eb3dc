//! CLI argument definitions for the gamefeat pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gamefeat",
    version,
    about = "Game catalog canonicalizer - build display and feature tables from raw game data",
    long_about = "Normalize a raw game-records table into two canonical artifacts:\n\
                  a display catalog for picker UIs and a fixed-column feature table\n\
                  for downstream models."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Build both canonical artifacts from a raw CSV export and summarize them.
    Build(BuildArgs),

    /// Build, then look up feature rows for the given identifiers.
    Query(QueryArgs),

    /// List the declared source columns and their roles.
    Columns,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Path to the raw games CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Path to the raw games CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Identifiers to look up, in the order rows should come back.
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Print picker labels from the catalog alongside the rows.
    #[arg(long = "labels")]
    pub labels: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
