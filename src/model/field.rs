// src/model/field.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::types::{FieldKind, MetricAggregation, ScalarType};

/// Canonical description of a result column as used by the chart layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// `<table>_<name>`, stable across runs for the same column name.
    pub id: String,
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub scalar_type: ScalarType,
    /// Set for metrics only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<MetricAggregation>,
    #[serde(default)]
    pub is_auto_generated: bool,
    /// Synthetic table owning the field.
    pub table: String,
    pub sql: String,
    pub compiled_sql: String,
    pub tables_references: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
}

impl FieldDescriptor {
    pub fn is_metric(&self) -> bool {
        self.kind == FieldKind::Metric
    }

    pub fn is_dimension(&self) -> bool {
        self.kind == FieldKind::Dimension
    }
}

/// Dimensions and metrics inferred from one result set, keyed by field id.
///
/// Both maps keep column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldModel {
    pub dimensions: IndexMap<String, FieldDescriptor>,
    pub metrics: IndexMap<String, FieldDescriptor>,
}

impl FieldModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor into the map matching its kind.
    ///
    /// A descriptor with an id already present replaces the earlier entry in
    /// either map, so an id never appears twice.
    pub fn insert(&mut self, field: FieldDescriptor) -> Option<FieldDescriptor> {
        let previous = self
            .dimensions
            .shift_remove(&field.id)
            .or_else(|| self.metrics.shift_remove(&field.id));

        let target = if field.is_metric() {
            &mut self.metrics
        } else {
            &mut self.dimensions
        };
        target.insert(field.id.clone(), field);
        previous
    }

    pub fn get(&self, id: &str) -> Option<&FieldDescriptor> {
        self.dimensions.get(id).or_else(|| self.metrics.get(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.dimensions.contains_key(id) || self.metrics.contains_key(id)
    }

    pub fn dimension_ids(&self) -> Vec<String> {
        self.dimensions.keys().cloned().collect()
    }

    pub fn metric_ids(&self) -> Vec<String> {
        self.metrics.keys().cloned().collect()
    }

    /// All fields, dimensions first.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.dimensions.values().chain(self.metrics.values())
    }

    /// Flatten into a single map, dimensions before metrics.
    pub fn flatten(&self) -> IndexMap<String, FieldDescriptor> {
        self.iter().map(|f| (f.id.clone(), f.clone())).collect()
    }

    pub fn len(&self) -> usize {
        self.dimensions.len() + self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty() && self.metrics.is_empty()
    }
}
