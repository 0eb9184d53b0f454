//! Pivot and axis options.
//!
//! Derives which fields may serve as x axis, y axis, or group-by series from
//! the field model alone. The previous chart configuration is never
//! consulted; the merge step reconciles the two.

use serde::{Deserialize, Serialize};

use crate::model::{AxisType, FieldDescriptor, FieldKind, FieldModel, ScalarType};

/// A field eligible for an axis or series slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotOption {
    pub field_id: String,
    pub label: String,
    pub kind: FieldKind,
    pub scalar_type: ScalarType,
    pub axis_type: AxisType,
}

impl PivotOption {
    fn from_field(field: &FieldDescriptor) -> Self {
        let axis_type = if !field.is_dimension() {
            AxisType::Value
        } else if field.scalar_type.is_temporal() {
            AxisType::Time
        } else {
            AxisType::Category
        };

        Self {
            field_id: field.id.clone(),
            label: field.label.clone(),
            kind: field.kind,
            scalar_type: field.scalar_type,
            axis_type,
        }
    }
}

/// Layout candidates for one result set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PivotOptions {
    /// Dimensions, then metrics.
    pub x_axis: Vec<PivotOption>,
    /// Metrics.
    pub y_axis: Vec<PivotOption>,
    /// Dimensions.
    pub group_by: Vec<PivotOption>,
}

impl PivotOptions {
    pub fn is_empty(&self) -> bool {
        self.x_axis.is_empty() && self.y_axis.is_empty() && self.group_by.is_empty()
    }

    pub fn has_x(&self, id: &str) -> bool {
        contains(&self.x_axis, id)
    }

    pub fn has_y(&self, id: &str) -> bool {
        contains(&self.y_axis, id)
    }

    pub fn has_group_by(&self, id: &str) -> bool {
        contains(&self.group_by, id)
    }

    pub fn first_dimension(&self) -> Option<&str> {
        self.group_by.first().map(|o| o.field_id.as_str())
    }

    pub fn first_metric(&self) -> Option<&str> {
        self.y_axis.first().map(|o| o.field_id.as_str())
    }
}

fn contains(options: &[PivotOption], id: &str) -> bool {
    options.iter().any(|o| o.field_id == id)
}

/// Resolve the layout candidates of a field model.
pub fn resolve_pivot_options(model: &FieldModel) -> PivotOptions {
    let dimensions: Vec<PivotOption> = model
        .dimensions
        .values()
        .map(PivotOption::from_field)
        .collect();
    let metrics: Vec<PivotOption> = model.metrics.values().map(PivotOption::from_field).collect();

    PivotOptions {
        x_axis: dimensions.iter().chain(metrics.iter()).cloned().collect(),
        y_axis: metrics,
        group_by: dimensions,
    }
}
