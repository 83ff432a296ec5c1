//! Configuration management for RW sidebar ordering.
//!
//! Parses the `[sidebar]` section of `rw.toml` with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [sidebar]
//! mode = "created_time_desc"   # asc | desc | created_time_asc | created_time_desc
//! readme_first = true
//! readme_first_force = false
//! index_name = "README"
//! ```
//!
//! The `custom` mode needs a comparator and therefore cannot be selected
//! from a file. Attach one in code with [`SortOptions::with_comparator`].

use std::path::{Path, PathBuf};

use rw_sidebar::{DEFAULT_INDEX_NAME, SortMode, SortOptions};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "rw.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sidebar ordering configuration.
    pub sidebar: SidebarConfig,
}

/// Sidebar ordering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SidebarConfig {
    /// Bulk sort mode. Defaults to filename ascending when unset.
    pub mode: Option<SortMode>,
    /// Pull the index page to the front before the priority pass.
    pub readme_first: bool,
    /// Pull the index page to the front after the priority pass.
    pub readme_first_force: bool,
    /// Reserved filename of the index page.
    pub index_name: String,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            mode: None,
            readme_first: true,
            readme_first_force: false,
            index_name: DEFAULT_INDEX_NAME.to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `rw.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Sort options for the ordering engine.
    #[must_use]
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            mode: self.sidebar.mode,
            comparator: None,
            readme_first: self.sidebar.readme_first,
            readme_first_force: self.sidebar.readme_first_force,
            index_name: self.sidebar.index_name.clone(),
        }
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.sidebar.index_name, "sidebar.index_name")?;

        if self.sidebar.mode == Some(SortMode::Custom) {
            return Err(ConfigError::Validation(
                "sidebar.mode = \"custom\" requires a comparator and cannot be set in rw.toml"
                    .to_owned(),
            ));
        }

        Ok(())
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }
}
