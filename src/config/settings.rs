//! TOML-based configuration for sqlchart.
//!
//! Example configuration:
//! ```toml
//! [sql_runner]
//! table_name = "sql_runner"
//! default_chart_kind = "bar"
//!
//! [labels]
//! style = "sentence"   # sentence | title | verbatim
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::inference::LabelStyle;
use crate::model::ChartKind;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Ad-hoc query settings.
    pub sql_runner: SqlRunnerSettings,

    /// Field label settings.
    pub labels: LabelSettings,
}

/// Ad-hoc query settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SqlRunnerSettings {
    /// Name of the synthetic table owning every result column.
    pub table_name: String,

    /// Chart kind a new session starts with.
    pub default_chart_kind: ChartKind,
}

impl Default for SqlRunnerSettings {
    fn default() -> Self {
        Self {
            table_name: "sql_runner".to_string(),
            default_chart_kind: ChartKind::Bar,
        }
    }
}

/// Field label settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelSettings {
    pub style: LabelStyle,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SQLCHART_CONFIG`
    /// 2. `./sqlchart.toml`
    /// 3. `~/.config/sqlchart/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("SQLCHART_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("sqlchart.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("sqlchart").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let table_name = &self.sql_runner.table_name;
        if table_name.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "sql_runner.table_name must not be empty".to_string(),
            ));
        }
        if table_name.chars().any(char::is_whitespace) {
            return Err(SettingsError::InvalidConfig(format!(
                "sql_runner.table_name must not contain whitespace: {:?}",
                table_name
            )));
        }
        Ok(())
    }
}
