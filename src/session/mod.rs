//! Visualization session state.
//!
//! A session owns everything derived from the latest query result for one
//! chart editing session and reacts to two events:
//!
//! ```text
//!   NewResults ──► normalize ──► resolve pivot options ──► merge ──► chart_config
//!   LoadSavedChart (same kind) ───────────────────────────────────► chart_config
//! ```
//!
//! Derived values are recomputed from inputs on every event. The saved-chart
//! request is computed lazily and reset whenever an input changes, so it can
//! never desynchronize from the state it was built from.

mod saved_chart;

pub use saved_chart::{CreateSavedChart, MetricQuery, PivotConfig, TableConfig};

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::inference::InferenceOptions;
use crate::merge::merge;
use crate::model::{ChartConfig, ChartKind, Column, RawRow};
use crate::normalize::{normalize, NormalizedResult};
use crate::pivot::{resolve_pivot_options, PivotOptions};

/// Payload of the "new results" event. Either part may be absent while a
/// query is still pending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResults {
    #[serde(default)]
    pub columns: Option<Vec<Column>>,
    #[serde(default)]
    pub rows: Option<Vec<RawRow>>,
}

impl QueryResults {
    pub fn new(columns: Vec<Column>, rows: Vec<RawRow>) -> Self {
        Self {
            columns: Some(columns),
            rows: Some(rows),
        }
    }
}

/// Events a session reacts to, processed in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    NewResults(QueryResults),
    LoadSavedChart { config: ChartConfig },
}

/// Everything a renderer or save layer consumes from a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutput<'a> {
    pub chart_config: &'a ChartConfig,
    pub pivot_options: &'a PivotOptions,
    pub normalized_result: Option<&'a NormalizedResult>,
    pub create_saved_chart: Option<&'a CreateSavedChart>,
}

/// State of one chart editing session.
#[derive(Debug)]
pub struct VisualizationSession {
    inference: InferenceOptions,
    chart_kind: ChartKind,
    chart_config: ChartConfig,
    pivot_fields: Option<Vec<String>>,
    result: Option<NormalizedResult>,
    pivot_options: PivotOptions,
    /// Bumped whenever `chart_config` actually changes.
    config_revision: u64,
    saved_chart: OnceCell<Option<CreateSavedChart>>,
}

impl Default for VisualizationSession {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl VisualizationSession {
    /// Start a session with the default chart of the configured kind.
    pub fn new(settings: &Settings) -> Self {
        let kind = settings.sql_runner.default_chart_kind;
        Self {
            inference: InferenceOptions::from_settings(settings),
            chart_kind: kind,
            chart_config: ChartConfig::default_for(kind),
            pivot_fields: None,
            result: None,
            pivot_options: PivotOptions::default(),
            config_revision: 0,
            saved_chart: OnceCell::new(),
        }
    }

    /// Start a session restored from a saved chart configuration.
    pub fn from_saved(settings: &Settings, config: ChartConfig) -> Self {
        let mut session = Self::new(settings);
        session.chart_kind = config.kind();
        session.chart_config = config;
        session
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply an event. Returns `true` if the chart configuration changed.
    pub fn handle(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::NewResults(results) => self.on_new_results(&results),
            SessionEvent::LoadSavedChart { config } => self.on_saved_chart(config),
        }
    }

    /// Recompute the whole derivation chain from a new result set and merge
    /// into the current configuration.
    ///
    /// When columns or rows are missing there is nothing to merge against:
    /// the result and options are cleared and the configuration is left as
    /// is. Returns `true` if the chart configuration changed.
    pub fn on_new_results(&mut self, results: &QueryResults) -> bool {
        self.saved_chart = OnceCell::new();
        self.result = normalize(
            results.columns.as_deref(),
            results.rows.as_deref(),
            &self.inference,
        );

        let Some(result) = &self.result else {
            tracing::debug!("results incomplete, keeping chart config");
            self.pivot_options = PivotOptions::default();
            return false;
        };

        self.pivot_options = resolve_pivot_options(&result.field_model());
        let merged = merge(
            self.chart_kind,
            Some(self.chart_config.clone()),
            &self.pivot_options,
        );
        self.replace_config(merged)
    }

    /// Replace the configuration wholesale with a saved one, bypassing the
    /// merge. Configurations of another chart kind are ignored.
    ///
    /// Returns `true` if the chart configuration changed.
    pub fn on_saved_chart(&mut self, config: ChartConfig) -> bool {
        if config.kind() != self.chart_kind {
            tracing::debug!(
                saved = %config.kind(),
                active = %self.chart_kind,
                "ignoring saved chart of another kind"
            );
            return false;
        }
        self.replace_config(config)
    }

    // =========================================================================
    // Editor actions
    // =========================================================================

    /// Switch chart kind, coercing the current configuration into the new
    /// shape. Pivot fields are left untouched.
    pub fn set_chart_type(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
        let coerced = self.chart_config.clone().coerce(kind);
        let config = if self.result.is_some() {
            merge(kind, Some(coerced), &self.pivot_options)
        } else {
            coerced
        };
        self.replace_config(config);
    }

    pub fn set_pivot_fields(&mut self, fields: Option<Vec<String>>) {
        self.pivot_fields = fields;
        self.saved_chart = OnceCell::new();
    }

    /// Replace the configuration with one edited outside the session. The
    /// active chart kind follows the configuration.
    pub fn set_chart_config(&mut self, config: ChartConfig) {
        self.chart_kind = config.kind();
        self.replace_config(config);
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.chart_config
    }

    pub fn pivot_fields(&self) -> Option<&[String]> {
        self.pivot_fields.as_deref()
    }

    pub fn normalized_result(&self) -> Option<&NormalizedResult> {
        self.result.as_ref()
    }

    pub fn pivot_options(&self) -> &PivotOptions {
        &self.pivot_options
    }

    /// Counter that changes only when the chart configuration does.
    pub fn config_revision(&self) -> u64 {
        self.config_revision
    }

    /// The request for saving the current chart, or `None` while no result
    /// exists.
    pub fn create_saved_chart(&self) -> Option<&CreateSavedChart> {
        self.saved_chart
            .get_or_init(|| {
                self.result.as_ref().map(|result| {
                    CreateSavedChart::build(
                        result,
                        self.pivot_fields.as_deref(),
                        &self.chart_config,
                    )
                })
            })
            .as_ref()
    }

    pub fn output(&self) -> SessionOutput<'_> {
        SessionOutput {
            chart_config: &self.chart_config,
            pivot_options: &self.pivot_options,
            normalized_result: self.result.as_ref(),
            create_saved_chart: self.create_saved_chart(),
        }
    }

    fn replace_config(&mut self, config: ChartConfig) -> bool {
        if config == self.chart_config {
            return false;
        }
        self.chart_config = config;
        self.config_revision += 1;
        self.saved_chart = OnceCell::new();
        true
    }
}
