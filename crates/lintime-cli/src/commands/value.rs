use serde::Serialize;

use crate::cli::ValueArgs;
use crate::error::CliError;

use super::{decode_input, lookup_all, warning_messages, CommandResult, Lookup};

#[derive(Debug, Serialize)]
struct ValueResponseData {
    series: String,
    values: Vec<Lookup>,
}

pub fn run(args: &ValueArgs) -> Result<CommandResult, CliError> {
    let report = decode_input(&args.data)?;
    let values = lookup_all(&report.series, &args.dates)?;
    let data = ValueResponseData {
        series: report.series.to_string(),
        values,
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_warnings(warning_messages(&report)))
}
