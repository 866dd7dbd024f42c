use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use lintime_core::{DecodeReport, Series};

use crate::config::StoreConfig;
use crate::error::CliError;

const SERIES_EXTENSION: &str = "series";
const BACKUP_EXTENSION: &str = "series.bak";

/// Directory of encoded series, one file per series.
#[derive(Debug, Clone)]
pub struct SeriesStore {
    dir: PathBuf,
}

impl SeriesStore {
    pub fn open(config: &StoreConfig) -> Self {
        Self {
            dir: config.series_dir.clone(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Decode a stored series; `Ok(None)` when no file exists for `name`.
    pub fn load(&self, name: &str) -> Result<Option<DecodeReport>, CliError> {
        let path = self.path_for(name)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        Series::decode_with_report(content.trim_end_matches(['\r', '\n']))
            .map(Some)
            .ok_or_else(|| {
                CliError::Command(format!("series file {} could not be decoded", path.display()))
            })
    }

    pub fn save(&self, name: &str, series: &Series) -> Result<PathBuf, CliError> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, series.encode())?;
        log::debug!("stored series '{name}' ({} points) at {}", series.len(), path.display());
        Ok(path)
    }

    /// Copy the current file for `name` aside before it is rewritten.
    pub fn backup(&self, name: &str) -> Result<PathBuf, CliError> {
        let path = self.path_for(name)?;
        let backup = path.with_extension(BACKUP_EXTENSION);
        fs::copy(&path, &backup)?;
        log::warn!("backed up {} to {}", path.display(), backup.display());
        Ok(backup)
    }

    /// Sorted names of all stored series.
    pub fn list(&self) -> Result<Vec<String>, CliError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(error.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SERIES_EXTENSION) {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if is_safe_series_name(stem) {
                names.push(stem.to_owned());
            }
        }

        names.sort();
        Ok(names)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf, CliError> {
        let name = name.trim();
        if !is_safe_series_name(name) {
            return Err(CliError::Command(format!("invalid series name '{name}'")));
        }

        Ok(self.dir.join(format!("{name}.{SERIES_EXTENSION}")))
    }
}

fn is_safe_series_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'))
}
