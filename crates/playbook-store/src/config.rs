use std::env;
use std::path::PathBuf;

/// Store configuration.
///
/// Reads from the `PLAYBOOK_DATA_DIR` environment variable, falling back to
/// a `data` directory relative to the working directory when unset.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the plan document files.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// The default data directory used when no environment variable is set.
    pub const DEFAULT_DIR: &str = "data";

    /// Build a config from the environment.
    ///
    /// Priority: `PLAYBOOK_DATA_DIR` env var, then the compile-time default.
    pub fn from_env() -> Self {
        let data_dir = env::var("PLAYBOOK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(Self::DEFAULT_DIR));
        Self { data_dir }
    }

    /// Build a config from an explicit directory (useful for tests and CLI
    /// flags).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
