//! Synthetic single-table explore for ad-hoc results.
//!
//! A full query engine resolves field metadata through an explore; ad-hoc
//! results get a one-table stand-in projected from the field model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{FieldDescriptor, FieldModel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explore {
    pub name: String,
    pub label: String,
    pub base_table: String,
    pub tables: IndexMap<String, ExploreTable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreTable {
    pub name: String,
    pub label: String,
    pub sql_table: String,
    pub dimensions: IndexMap<String, FieldDescriptor>,
    pub metrics: IndexMap<String, FieldDescriptor>,
}

impl Explore {
    /// Project a field model into a single-table explore named after `table`.
    pub fn from_model(table: &str, model: &FieldModel) -> Self {
        let label = crate::inference::friendly_name(table, Default::default());

        let mut tables = IndexMap::new();
        tables.insert(
            table.to_string(),
            ExploreTable {
                name: table.to_string(),
                label: label.clone(),
                sql_table: String::new(),
                dimensions: model.dimensions.clone(),
                metrics: model.metrics.clone(),
            },
        );

        Self {
            name: table.to_string(),
            label,
            base_table: table.to_string(),
            tables,
        }
    }

    /// Resolve a field by id across every table.
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.tables
            .values()
            .find_map(|t| t.dimensions.get(id).or_else(|| t.metrics.get(id)))
    }
}
