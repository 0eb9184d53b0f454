//! Loading result sets and chart configurations from JSON documents.
//!
//! The core pipeline is infallible; this is the edge where files are read
//! and parsed.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::model::ChartConfig;
use crate::session::QueryResults;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur while loading input documents.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type InputResult<T> = Result<T, InputError>;

// ============================================================================
// Loaders
// ============================================================================

/// Parse a `{columns, rows}` result document.
pub fn parse_results(json: &str) -> InputResult<QueryResults> {
    parse_json(json, "query results")
}

/// Parse a chart configuration tagged with its `type`.
pub fn parse_chart_config(json: &str) -> InputResult<ChartConfig> {
    parse_json(json, "chart config")
}

pub fn read_results<P: AsRef<Path>>(path: P) -> InputResult<QueryResults> {
    parse_results(&read(path.as_ref())?)
}

pub fn read_chart_config<P: AsRef<Path>>(path: P) -> InputResult<ChartConfig> {
    parse_chart_config(&read(path.as_ref())?)
}

fn read(path: &Path) -> InputResult<String> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: DeserializeOwned>(json: &str, what: &str) -> InputResult<T> {
    serde_json::from_str(json).map_err(|source| InputError::Parse {
        what: what.to_string(),
        source,
    })
}
