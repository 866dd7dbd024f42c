//! CLI argument definitions for lintime.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `encode` | Build a series from `DATE=VALUE` pairs and print its text form |
//! | `decode` | Inspect an encoded series |
//! | `value` | Interpolate an encoded series at one or more dates |
//! | `store` | Read and write series kept in the local store |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat decode warnings as errors |
//! | `--store-dir` | `$LINTIME_HOME/series` | Directory of the series store |
//!
//! # Examples
//!
//! ```bash
//! lintime encode --name Rates 2020-01-01=100 2020-01-11=200
//! lintime value 'Rates|20200101100¤20200111200' 2020-01-06
//! lintime store put rates 2020-01-01 100
//! lintime --format table store get rates 2020-01-06
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Sparse date series with linear interpolation.
#[derive(Debug, Parser)]
#[command(
    name = "lintime",
    author,
    version,
    about = "Date-indexed series with linear interpolation"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Fail (exit code 5) when a decoded series produced warnings.
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Directory holding stored series files.
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value listing.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a series from observations and print its encoded form.
    ///
    ///   lintime encode --name Rates 2020-01-01=100 2020-01-11=200
    Encode(EncodeArgs),

    /// Decode an encoded series and show its contents.
    Decode(DecodeArgs),

    /// Interpolate an encoded series at the given dates.
    Value(ValueArgs),

    /// Manage series stored on disk.
    Store(StoreArgs),
}

/// Arguments for the `encode` command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Series name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Observations as `YYYY-MM-DD=VALUE`.
    #[arg(num_args = 0..)]
    pub observations: Vec<String>,
}

/// Arguments for the `decode` command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Encoded series text.
    pub data: String,
}

/// Arguments for the `value` command.
#[derive(Debug, Args)]
pub struct ValueArgs {
    /// Encoded series text.
    pub data: String,

    /// Dates to query as `YYYY-MM-DD`.
    #[arg(required = true, num_args = 1..)]
    pub dates: Vec<String>,
}

/// Arguments for the `store` command group.
#[derive(Debug, Args)]
pub struct StoreArgs {
    #[command(subcommand)]
    pub command: StoreCommand,
}

/// Store subcommands.
#[derive(Debug, Subcommand)]
pub enum StoreCommand {
    /// Insert or replace one observation, creating the series if needed.
    Put(StorePutArgs),

    /// Interpolate a stored series at the given dates.
    Get(StoreGetArgs),

    /// Show a stored series.
    Show(StoreShowArgs),

    /// List stored series names.
    List,
}

/// Arguments for `store put`.
#[derive(Debug, Args)]
pub struct StorePutArgs {
    /// Stored series name.
    pub series: String,

    /// Observation date as `YYYY-MM-DD`.
    pub date: String,

    /// Observed value.
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Arguments for `store get`.
#[derive(Debug, Args)]
pub struct StoreGetArgs {
    /// Stored series name.
    pub series: String,

    /// Dates to query as `YYYY-MM-DD`.
    #[arg(required = true, num_args = 1..)]
    pub dates: Vec<String>,
}

/// Arguments for `store show`.
#[derive(Debug, Args)]
pub struct StoreShowArgs {
    /// Stored series name.
    pub series: String,
}
