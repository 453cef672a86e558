//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adprep",
    version,
    about = "Normalize anomaly-detection benchmarks into a canonical CSV schema",
    long_about = "Normalize three public anomaly-detection benchmarks (NAB, Yahoo S5,\n\
                  KDD Cup '99) into CSV files sharing one schema: numeric feature\n\
                  columns plus a binary `is_anomaly` label."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

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
    /// Normalize all three benchmark datasets into canonical CSVs.
    Prepare(PrepareArgs),

    /// List the supported datasets and their expected source layout.
    Datasets,
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Folder containing the downloaded benchmark distributions
    /// (NAB-master, yahoo-s5-data, kdd-cup-99-data).
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Output directory for canonical CSVs (default: <SOURCE_DIR>/datasets).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Override the NAB source root (default: <SOURCE_DIR>/NAB-master).
    #[arg(long = "nab-dir", value_name = "DIR")]
    pub nab_dir: Option<PathBuf>,

    /// Override the Yahoo S5 source root (default: <SOURCE_DIR>/yahoo-s5-data).
    #[arg(long = "yahoo-dir", value_name = "DIR")]
    pub yahoo_dir: Option<PathBuf>,

    /// Override the KDD'99 source root (default: <SOURCE_DIR>/kdd-cup-99-data).
    #[arg(long = "kdd-dir", value_name = "DIR")]
    pub kdd_dir: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
