//! Field model and chart configuration types.

pub mod chart;
pub mod field;
pub mod types;

pub use chart::{CartesianLayout, ChartConfig, ChartKind, PieLayout, TableColumn, TableLayout};
pub use field::{FieldDescriptor, FieldModel};
pub use types::{field_id, AxisType, Column, FieldKind, MetricAggregation, RawRow, ScalarType};
