use serde::Serialize;

use crate::cli::DecodeArgs;
use crate::error::CliError;

use super::{decode_input, warning_messages, CommandResult, SeriesView};

#[derive(Debug, Serialize)]
struct DecodeResponseData<'a> {
    series: SeriesView<'a>,
}

pub fn run(args: &DecodeArgs) -> Result<CommandResult, CliError> {
    let report = decode_input(&args.data)?;
    let data = DecodeResponseData {
        series: SeriesView::new(&report.series),
    };

    Ok(CommandResult::ok(serde_json::to_value(data)?).with_warnings(warning_messages(&report)))
}
