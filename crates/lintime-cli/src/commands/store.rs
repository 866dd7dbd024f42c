use lintime_core::{DecodeReport, Series, SeriesDate, ValuePoint};
use serde::Serialize;

use crate::cli::{StoreArgs, StoreCommand};
use crate::error::CliError;
use crate::store::SeriesStore;

use super::{lookup_all, warning_messages, CommandResult, Lookup, SeriesView};

#[derive(Debug, Serialize)]
struct PutResponseData<'a> {
    path: String,
    backup: Option<String>,
    point: ValuePoint,
    replaced: Option<f64>,
    series: SeriesView<'a>,
}

#[derive(Debug, Serialize)]
struct GetResponseData {
    series: String,
    values: Vec<Lookup>,
}

#[derive(Debug, Serialize)]
struct ShowResponseData<'a> {
    series: SeriesView<'a>,
}

#[derive(Debug, Serialize)]
struct ListResponseData {
    store_dir: String,
    series: Vec<String>,
}

/// Runs a store subcommand. With `strict`, a damaged file is never rewritten.
pub fn run(
    args: &StoreArgs,
    store: &SeriesStore,
    strict: bool,
) -> Result<CommandResult, CliError> {
    match &args.command {
        StoreCommand::Put(put) => {
            let date = SeriesDate::parse(&put.date)?;
            let (mut series, warnings) = match store.load(&put.series)? {
                Some(report) => {
                    let warnings = warning_messages(&report);
                    (report.series, warnings)
                }
                None => (Series::named(&put.series), Vec::new()),
            };

            // Decoding dropped or coerced segments; rewriting would lose them.
            let backup = if warnings.is_empty() {
                None
            } else if strict {
                return Err(CliError::StrictModeViolation {
                    warning_count: warnings.len(),
                });
            } else {
                Some(store.backup(&put.series)?)
            };

            let replaced = series.value_point(date).map(ValuePoint::value);
            let point = ValuePoint::new(date, put.value);
            series.add_point(point);
            let path = store.save(&put.series, &series)?;

            let data = PutResponseData {
                path: path.display().to_string(),
                backup: backup.map(|path| path.display().to_string()),
                point,
                replaced,
                series: SeriesView::new(&series),
            };
            Ok(CommandResult::ok(serde_json::to_value(data)?).with_warnings(warnings))
        }
        StoreCommand::Get(get) => {
            let report = load_existing(store, &get.series)?;
            let data = GetResponseData {
                series: report.series.to_string(),
                values: lookup_all(&report.series, &get.dates)?,
            };
            Ok(CommandResult::ok(serde_json::to_value(data)?)
                .with_warnings(warning_messages(&report)))
        }
        StoreCommand::Show(show) => {
            let report = load_existing(store, &show.series)?;
            let data = ShowResponseData {
                series: SeriesView::new(&report.series),
            };
            Ok(CommandResult::ok(serde_json::to_value(data)?)
                .with_warnings(warning_messages(&report)))
        }
        StoreCommand::List => {
            let data = ListResponseData {
                store_dir: store.dir().display().to_string(),
                series: store.list()?,
            };
            Ok(CommandResult::ok(serde_json::to_value(data)?))
        }
    }
}

fn load_existing(store: &SeriesStore, name: &str) -> Result<DecodeReport, CliError> {
    store.load(name)?.ok_or_else(|| {
        CliError::Command(format!(
            "series '{}' not found under {}",
            name.trim(),
            store.dir().display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::cli::{StoreGetArgs, StorePutArgs, StoreShowArgs};
    use crate::config::StoreConfig;

    fn put(store: &SeriesStore, date: &str, value: f64) -> CommandResult {
        let args = StoreArgs {
            command: StoreCommand::Put(StorePutArgs {
                series: String::from("rates"),
                date: String::from(date),
                value,
            }),
        };
        run(&args, store, false).expect("put")
    }

    fn put_args(date: &str, value: f64) -> StoreArgs {
        StoreArgs {
            command: StoreCommand::Put(StorePutArgs {
                series: String::from("damaged"),
                date: String::from(date),
                value,
            }),
        }
    }

    const DAMAGED: &str = "Damaged|20200101100¤20201340 5¤20200111200";

    fn damaged_store(temp: &tempfile::TempDir) -> SeriesStore {
        let store = SeriesStore::open(&StoreConfig::with_home(temp.path().to_path_buf()));
        fs::create_dir_all(store.dir()).expect("mkdir");
        fs::write(store.dir().join("damaged.series"), DAMAGED).expect("write");
        store
    }

    #[test]
    fn put_then_get_interpolates_stored_series() {
        let temp = tempdir().expect("tempdir");
        let store = SeriesStore::open(&StoreConfig::with_home(temp.path().to_path_buf()));

        put(&store, "2020-01-01", 100.0);
        put(&store, "2020-01-11", 1.0);
        let replaced = put(&store, "2020-01-11", 200.0);
        assert_eq!(replaced.data["replaced"], 1.0);

        let args = StoreArgs {
            command: StoreCommand::Get(StoreGetArgs {
                series: String::from("rates"),
                dates: vec![String::from("2020-01-06")],
            }),
        };
        let result = run(&args, &store, false).expect("get");
        assert_eq!(result.data["values"][0]["value"], 150.0);
        assert_eq!(result.data["series"], "rates (2 values, 2020-01-01 - 2020-01-11)");
    }

    #[test]
    fn show_surfaces_warnings_from_damaged_file() {
        let temp = tempdir().expect("tempdir");
        let store = SeriesStore::open(&StoreConfig::with_home(temp.path().to_path_buf()));
        fs::create_dir_all(store.dir()).expect("mkdir");
        fs::write(store.dir().join("damaged.series"), "Damaged|20200101100¤2020").expect("write");

        let args = StoreArgs {
            command: StoreCommand::Show(StoreShowArgs {
                series: String::from("damaged"),
            }),
        };
        let result = run(&args, &store, false).expect("show");
        assert_eq!(result.data["series"]["points"].as_array().map(Vec::len), Some(1));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn strict_put_leaves_damaged_file_untouched() {
        let temp = tempdir().expect("tempdir");
        let store = damaged_store(&temp);

        let err = run(&put_args("2020-01-05", 1.0), &store, true)
            .err()
            .expect("must fail");

        assert!(matches!(err, CliError::StrictModeViolation { warning_count: 1 }));
        assert_eq!(
            fs::read_to_string(store.dir().join("damaged.series")).expect("read"),
            DAMAGED
        );
        assert!(!store.dir().join("damaged.series.bak").exists());
    }

    #[test]
    fn lenient_put_backs_up_damaged_file_before_rewriting() {
        let temp = tempdir().expect("tempdir");
        let store = damaged_store(&temp);

        let result = run(&put_args("2020-01-05", 1.0), &store, false).expect("put");

        assert_eq!(result.warnings.len(), 1);
        let backup = store.dir().join("damaged.series.bak");
        assert_eq!(result.data["backup"], backup.display().to_string());
        assert_eq!(fs::read_to_string(backup).expect("read"), DAMAGED);
        assert_eq!(
            fs::read_to_string(store.dir().join("damaged.series")).expect("read"),
            "Damaged|20200101100¤202001051¤20200111200"
        );
    }

    #[test]
    fn strict_put_on_clean_file_writes() {
        let temp = tempdir().expect("tempdir");
        let store = SeriesStore::open(&StoreConfig::with_home(temp.path().to_path_buf()));

        let result = run(&put_args("2020-01-05", 1.0), &store, true).expect("put");

        assert!(result.data["backup"].is_null());
        assert_eq!(
            fs::read_to_string(store.dir().join("damaged.series")).expect("read"),
            "damaged|202001051"
        );
    }

    #[test]
    fn get_on_missing_series_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let store = SeriesStore::open(&StoreConfig::with_home(temp.path().to_path_buf()));

        let args = StoreArgs {
            command: StoreCommand::Show(StoreShowArgs {
                series: String::from("missing"),
            }),
        };
        let err = run(&args, &store, false).err().expect("must fail");
        assert!(matches!(err, CliError::Command(_)));
    }
}
