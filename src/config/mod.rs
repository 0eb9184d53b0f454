//! Configuration module for sqlchart.
//!
//! Handles the settings file and the defaults it overrides.

mod settings;

pub use settings::{LabelSettings, Settings, SettingsError, SqlRunnerSettings};
