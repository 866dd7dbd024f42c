mod decode;
mod encode;
mod store;
mod value;

use lintime_core::{DecodeReport, Series, SeriesDate, ValuePoint};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::config::StoreConfig;
use crate::error::CliError;
use crate::store::SeriesStore;

pub struct CommandResult {
    pub data: Value,
    pub warnings: Vec<String>,
}

impl CommandResult {
    pub fn ok(data: Value) -> Self {
        Self {
            data,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

pub fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Encode(args) => encode::run(args),
        Command::Decode(args) => decode::run(args),
        Command::Value(args) => value::run(args),
        Command::Store(args) => {
            let config = StoreConfig::resolve(cli.store_dir.clone());
            log::debug!("series store at {}", config.series_dir.display());
            store::run(args, &SeriesStore::open(&config), cli.strict)
        }
    }
}

/// JSON view of a series shared by the decode and store commands.
#[derive(Debug, Serialize)]
struct SeriesView<'a> {
    name: &'a str,
    description: String,
    date_span: String,
    encoded: String,
    points: Vec<&'a ValuePoint>,
}

impl<'a> SeriesView<'a> {
    fn new(series: &'a Series) -> Self {
        Self {
            name: series.name(),
            description: series.to_string(),
            date_span: series.date_span_description(),
            encoded: series.encode(),
            points: series.points().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Lookup {
    date: SeriesDate,
    value: f64,
    exact: bool,
}

fn lookup_all(series: &Series, dates: &[String]) -> Result<Vec<Lookup>, CliError> {
    dates
        .iter()
        .map(|raw| {
            let date = SeriesDate::parse(raw)?;
            Ok(Lookup {
                date,
                value: series.value_at(date),
                exact: series.value_point(date).is_some(),
            })
        })
        .collect()
}

fn decode_input(data: &str) -> Result<DecodeReport, CliError> {
    Series::decode_with_report(data)
        .ok_or_else(|| CliError::Command(String::from("encoded series is empty")))
}

fn warning_messages(report: &DecodeReport) -> Vec<String> {
    report
        .warnings
        .iter()
        .map(|warning| warning.to_string())
        .collect()
}
