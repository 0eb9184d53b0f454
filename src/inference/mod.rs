//! Field inference for ad-hoc SQL results.
//!
//! Every column of a result set becomes exactly one [`FieldDescriptor`]:
//! numeric columns are metrics with a pass-through aggregation, everything
//! else is a dimension keeping its native scalar type. All columns belong to
//! one synthetic table, since an ad-hoc query has no semantic model behind it.

mod label;

pub use label::{friendly_name, LabelStyle};

use crate::config::Settings;
use crate::model::{
    field_id, Column, FieldDescriptor, FieldKind, FieldModel, MetricAggregation,
};

/// Options controlling inference.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceOptions {
    /// Synthetic table owning every column.
    pub table_name: String,
    pub label_style: LabelStyle,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl InferenceOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            table_name: settings.sql_runner.table_name.clone(),
            label_style: settings.labels.style,
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }
}

/// Infer the field model of a result set.
///
/// Duplicate column names are resolved last-write-wins: the later column
/// replaces the earlier descriptor, including its classification.
pub fn infer(columns: &[Column], options: &InferenceOptions) -> FieldModel {
    let mut model = FieldModel::new();

    for column in columns {
        let field = describe(column, options);
        if let Some(previous) = model.insert(field) {
            tracing::warn!(
                column = %column.name,
                previous_kind = ?previous.kind,
                "duplicate column name in result set, keeping the last one"
            );
        }
    }

    tracing::debug!(
        dimensions = model.dimensions.len(),
        metrics = model.metrics.len(),
        "inferred field model"
    );
    model
}

/// Build the descriptor for a single column.
pub fn describe(column: &Column, options: &InferenceOptions) -> FieldDescriptor {
    let table = options.table_name.clone();
    let (kind, aggregation) = if column.scalar_type.is_numeric() {
        (FieldKind::Metric, Some(MetricAggregation::Number))
    } else {
        (FieldKind::Dimension, None)
    };

    FieldDescriptor {
        id: field_id(&table, &column.name),
        name: column.name.clone(),
        label: friendly_name(&column.name, options.label_style),
        kind,
        scalar_type: column.scalar_type,
        aggregation,
        is_auto_generated: false,
        sql: String::new(),
        compiled_sql: String::new(),
        tables_references: vec![table.clone()],
        table,
        hidden: false,
    }
}
