use lintime_core::{Series, SeriesDate};
use serde::Serialize;

use crate::cli::EncodeArgs;
use crate::error::CliError;

use super::{CommandResult, SeriesView};

#[derive(Debug, Serialize)]
struct EncodeResponseData<'a> {
    series: SeriesView<'a>,
}

pub fn run(args: &EncodeArgs) -> Result<CommandResult, CliError> {
    let mut series = Series::named(&args.name);
    for raw in &args.observations {
        let (date, value) = parse_observation(raw)?;
        series.add_source(date, value);
    }

    let data = EncodeResponseData {
        series: SeriesView::new(&series),
    };
    Ok(CommandResult::ok(serde_json::to_value(data)?))
}

fn parse_observation(raw: &str) -> Result<(SeriesDate, f64), CliError> {
    let Some((date, value)) = raw.split_once('=') else {
        return Err(CliError::Command(format!(
            "observation '{raw}' must look like YYYY-MM-DD=VALUE"
        )));
    };

    let date = SeriesDate::parse(date)?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::Command(format!("invalid value in observation '{raw}'")))?;
    Ok((date, value))
}
