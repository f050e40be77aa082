//! Configuration file management for playbook.
//!
//! Provides a TOML-based config file at `~/.config/playbook/config.toml`
//! and a resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use playbook_store::StoreConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub store: StoreSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    /// Directory holding the plan document files.
    pub data_dir: String,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the playbook config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/playbook` or
/// `~/.config/playbook`. We intentionally ignore the platform-specific
/// `dirs::config_dir()` (which returns `~/Library/Application Support` on
/// macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("playbook");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("playbook")
}

/// Return the path to the playbook config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct PlaybookConfig {
    pub store_config: StoreConfig,
}

impl PlaybookConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config
    /// file > default.
    ///
    /// Data dir: `cli_data_dir` > `PLAYBOOK_DATA_DIR` env >
    /// `config_file.store.data_dir` > `StoreConfig::DEFAULT_DIR`.
    pub fn resolve(cli_data_dir: Option<&str>) -> Result<Self> {
        let store_config = if let Some(dir) = cli_data_dir {
            StoreConfig::new(dir)
        } else if let Ok(dir) = std::env::var("PLAYBOOK_DATA_DIR") {
            StoreConfig::new(dir)
        } else if let Ok(cfg) = load_config() {
            StoreConfig::new(cfg.store.data_dir)
        } else {
            StoreConfig::new(StoreConfig::DEFAULT_DIR)
        };

        Ok(Self { store_config })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
