//! Result normalization.
//!
//! Converts raw result rows into the keyed `{value: {raw, formatted}}` cells a
//! chart renderer consumes, and assembles a synthetic query result (dimension
//! and metric ids, rows, fields, explore) shaped like the output of a full
//! query engine.

mod explore;
mod format;

pub use explore::{Explore, ExploreTable};
pub use format::format_raw;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::inference::{infer, InferenceOptions};
use crate::model::{field_id, Column, FieldDescriptor, FieldModel, RawRow};

/// A raw cell value and its display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellValue {
    pub raw: Value,
    pub formatted: String,
}

impl CellValue {
    pub fn new(raw: Value) -> Self {
        let formatted = format_raw(&raw);
        Self { raw, formatted }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCell {
    pub value: CellValue,
}

/// One normalized row, keyed by `<table>_<column>` in column order.
pub type RowRecord = IndexMap<String, ResultCell>;

/// Synthetic query result built from an ad-hoc result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub dimension_ids: Vec<String>,
    pub metric_ids: Vec<String>,
    pub rows: Vec<RowRecord>,
    /// Every field, dimensions first.
    pub fields: IndexMap<String, FieldDescriptor>,
    pub explore: Explore,
}

impl NormalizedResult {
    /// Rebuild the field model the result was projected from.
    pub fn field_model(&self) -> FieldModel {
        let mut model = FieldModel::new();
        for field in self.fields.values() {
            model.insert(field.clone());
        }
        model
    }

    pub fn table_name(&self) -> &str {
        &self.explore.base_table
    }

    /// Column order for tables: dimensions before metrics.
    pub fn column_order(&self) -> Vec<String> {
        self.dimension_ids
            .iter()
            .chain(self.metric_ids.iter())
            .cloned()
            .collect()
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.get(id)
    }
}

/// Normalize a result set.
///
/// Returns `None` when either input is absent, which marks "no query has run
/// yet" as distinct from a query returning zero rows.
pub fn normalize(
    columns: Option<&[Column]>,
    rows: Option<&[RawRow]>,
    options: &InferenceOptions,
) -> Option<NormalizedResult> {
    let (columns, rows) = (columns?, rows?);
    let table = options.table_name.as_str();
    let model = infer(columns, options);

    // Keys are computed once per column. A duplicate name moves to its last
    // position, matching the field model.
    let mut keys: IndexMap<&str, String> = IndexMap::with_capacity(columns.len());
    for column in columns {
        keys.shift_remove(column.name.as_str());
        keys.insert(column.name.as_str(), field_id(table, &column.name));
    }

    let records: Vec<RowRecord> = rows.iter().map(|row| normalize_row(row, &keys)).collect();

    tracing::debug!(
        rows = records.len(),
        fields = model.len(),
        "normalized result set"
    );

    Some(NormalizedResult {
        dimension_ids: model.dimension_ids(),
        metric_ids: model.metric_ids(),
        rows: records,
        fields: model.flatten(),
        explore: Explore::from_model(table, &model),
    })
}

fn normalize_row(row: &RawRow, keys: &IndexMap<&str, String>) -> RowRecord {
    let mut record = RowRecord::with_capacity(keys.len());
    for (name, key) in keys {
        let raw = row.get(*name).cloned().unwrap_or(Value::Null);
        record.insert(
            key.clone(),
            ResultCell {
                value: CellValue::new(raw),
            },
        );
    }
    record
}
