//! Optional TOML configuration
//!
//! Every key is optional; command-line flags override what is read here.
//!
//! ```toml
//! data_file = "todo_data.dat"
//! log_level = "info"
//! log_dir = "/var/log/folder-todo"   # omit to log to stderr
//! save_on_exit = true
//! autosave = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::DEFAULT_DATA_FILE;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path of the binary data file
    pub data_file: PathBuf,
    /// Log level or flexi_logger spec (e.g. "debug", "info, folder_todo=trace")
    pub log_level: String,
    /// Directory for rotating log files; stderr when unset
    pub log_dir: Option<PathBuf>,
    /// Save the store when the server shuts down
    pub save_on_exit: bool,
    /// Save after every successful change
    pub autosave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "info".to_string(),
            log_dir: None,
            save_on_exit: true,
            autosave: false,
        }
    }
}

impl Config {
    /// Read the configuration file, or use defaults when none is given
    ///
    /// # Errors
    /// Returns an error when an explicitly given file cannot be read or
    /// is not valid TOML for this structure.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
