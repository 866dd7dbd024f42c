use std::env;
use std::path::PathBuf;

/// Location of the on-disk series store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one `.series` file per stored series.
    pub series_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_home(resolve_lintime_home())
    }
}

impl StoreConfig {
    /// Store rooted at `<lintime_home>/series`.
    pub fn with_home(lintime_home: PathBuf) -> Self {
        Self {
            series_dir: lintime_home.join("series"),
        }
    }

    /// An explicit directory wins; the environment is only consulted without one.
    pub fn resolve(series_dir: Option<PathBuf>) -> Self {
        match series_dir {
            Some(series_dir) => Self { series_dir },
            None => Self::default(),
        }
    }
}

fn resolve_lintime_home() -> PathBuf {
    if let Some(path) = env::var_os("LINTIME_HOME") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".lintime");
    }

    PathBuf::from(".lintime")
}
