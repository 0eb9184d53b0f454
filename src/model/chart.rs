//! Chart kinds and their per-kind configuration payloads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Discriminant selecting the configuration shape and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Table,
}

impl ChartKind {
    /// Parse a chart kind from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Some(ChartKind::Bar),
            "line" => Some(ChartKind::Line),
            "pie" => Some(ChartKind::Pie),
            "table" => Some(ChartKind::Table),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Table => "table",
        }
    }

    pub fn is_cartesian(&self) -> bool {
        matches!(self, ChartKind::Bar | ChartKind::Line)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout shared by bar and line charts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartesianLayout {
    pub x_field: Option<String>,
    pub y_fields: Vec<String>,
    pub group_by: Option<String>,
    pub flip_axes: bool,
    pub stack: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PieLayout {
    pub group_field: Option<String>,
    pub metric_field: Option<String>,
    pub donut: bool,
}

/// Display settings for one table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub visible: bool,
    pub label: String,
    #[serde(default)]
    pub frozen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Column settings keyed by field id, in display order.
    pub columns: IndexMap<String, TableColumn>,
}

/// A chart configuration tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartConfig {
    Bar(CartesianLayout),
    Line(CartesianLayout),
    Pie(PieLayout),
    Table(TableLayout),
}

impl ChartConfig {
    /// An empty configuration of the given kind.
    pub fn default_for(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => ChartConfig::Bar(CartesianLayout::default()),
            ChartKind::Line => ChartConfig::Line(CartesianLayout::default()),
            ChartKind::Pie => ChartConfig::Pie(PieLayout::default()),
            ChartKind::Table => ChartConfig::Table(TableLayout::default()),
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartConfig::Bar(_) => ChartKind::Bar,
            ChartConfig::Line(_) => ChartKind::Line,
            ChartConfig::Pie(_) => ChartKind::Pie,
            ChartConfig::Table(_) => ChartKind::Table,
        }
    }

    /// Convert into a configuration of another kind, carrying over the
    /// selections that have a counterpart in the target shape.
    ///
    /// Coercion does not check field ids against any result; the merge step
    /// does that.
    pub fn coerce(self, kind: ChartKind) -> ChartConfig {
        if self.kind() == kind {
            return self;
        }

        match (self, kind) {
            (ChartConfig::Bar(layout) | ChartConfig::Line(layout), ChartKind::Bar) => {
                ChartConfig::Bar(layout)
            }
            (ChartConfig::Bar(layout) | ChartConfig::Line(layout), ChartKind::Line) => {
                ChartConfig::Line(layout)
            }
            (ChartConfig::Bar(layout) | ChartConfig::Line(layout), ChartKind::Pie) => {
                ChartConfig::Pie(PieLayout {
                    group_field: layout.x_field,
                    metric_field: layout.y_fields.into_iter().next(),
                    donut: false,
                })
            }
            (ChartConfig::Pie(pie), kind) if kind.is_cartesian() => {
                let layout = CartesianLayout {
                    x_field: pie.group_field,
                    y_fields: pie.metric_field.into_iter().collect(),
                    ..CartesianLayout::default()
                };
                if kind == ChartKind::Bar {
                    ChartConfig::Bar(layout)
                } else {
                    ChartConfig::Line(layout)
                }
            }
            (_, kind) => ChartConfig::default_for(kind),
        }
    }

    /// Every field id the configuration refers to.
    pub fn field_references(&self) -> Vec<&str> {
        match self {
            ChartConfig::Bar(layout) | ChartConfig::Line(layout) => layout
                .x_field
                .iter()
                .chain(layout.y_fields.iter())
                .chain(layout.group_by.iter())
                .map(String::as_str)
                .collect(),
            ChartConfig::Pie(pie) => pie
                .group_field
                .iter()
                .chain(pie.metric_field.iter())
                .map(String::as_str)
                .collect(),
            ChartConfig::Table(table) => table.columns.keys().map(String::as_str).collect(),
        }
    }
}
