use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::commands::CommandResult;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct Rendered<'a> {
    data: &'a Value,
    warnings: &'a [String],
}

pub fn render(result: &CommandResult, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = Rendered {
                data: &result.data,
                warnings: &result.warnings,
            };
            let payload = if pretty {
                serde_json::to_string_pretty(&rendered)?
            } else {
                serde_json::to_string(&rendered)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(result),
    }

    Ok(())
}

fn render_table(result: &CommandResult) {
    for line in table_lines(&result.data, 0) {
        println!("{line}");
    }

    if !result.warnings.is_empty() {
        println!("warnings:");
        for warning in &result.warnings {
            println!("  - {warning}");
        }
    }
}

fn table_lines(value: &Value, depth: usize) -> Vec<String> {
    let indent = "  ".repeat(depth);
    let mut lines = Vec::new();

    match value {
        Value::Object(map) => {
            let width = map.keys().map(String::len).max().unwrap_or(0);
            for (key, child) in map {
                if is_scalar(child) {
                    lines.push(format!("{indent}{key:<width$}: {}", scalar_text(child)));
                } else {
                    lines.push(format!("{indent}{key}:"));
                    lines.extend(table_lines(child, depth + 1));
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(map) if map.values().all(is_scalar) => {
                        let row = map
                            .iter()
                            .map(|(key, child)| format!("{key}={}", scalar_text(child)))
                            .collect::<Vec<_>>()
                            .join("  ");
                        lines.push(format!("{indent}- {row}"));
                    }
                    other if is_scalar(other) => {
                        lines.push(format!("{indent}- {}", scalar_text(other)));
                    }
                    other => {
                        lines.push(format!("{indent}-"));
                        lines.extend(table_lines(other, depth + 1));
                    }
                }
            }
        }
        scalar => lines.push(format!("{indent}{}", scalar_text(scalar))),
    }

    lines
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::from("-"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flattens_nested_data_into_lines() {
        let data = json!({
            "series": "Rates",
            "values": [
                { "date": "2020-01-06", "value": 150.0 }
            ]
        });

        assert_eq!(
            table_lines(&data, 0),
            vec![
                String::from("series: Rates"),
                String::from("values:"),
                String::from("  - date=2020-01-06  value=150.0"),
            ]
        );
    }

    #[test]
    fn renders_null_as_dash() {
        assert_eq!(scalar_text(&Value::Null), "-");
    }
}
