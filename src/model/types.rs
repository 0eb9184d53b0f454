//! Primitive types shared by the field model and chart configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Scalar type of a result-set column, as reported by the warehouse adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    #[default]
    String,
    Number,
    Date,
    Timestamp,
    Boolean,
}

impl ScalarType {
    /// Parse a scalar type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "string" | "text" | "varchar" => Some(ScalarType::String),
            "number" | "numeric" | "int" | "integer" | "float" | "decimal" => {
                Some(ScalarType::Number)
            }
            "date" => Some(ScalarType::Date),
            "timestamp" | "datetime" => Some(ScalarType::Timestamp),
            "boolean" | "bool" => Some(ScalarType::Boolean),
            _ => None,
        }
    }

    /// Parse a scalar type, falling back to the default dimension type.
    pub fn parse_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ScalarType::Number)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, ScalarType::Date | ScalarType::Timestamp)
    }
}

// Unknown type strings map to the default classification instead of failing.
impl<'de> Deserialize<'de> for ScalarType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(ScalarType::parse_lossy).unwrap_or_default())
    }
}

/// Whether a field groups rows or is aggregated over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Dimension,
    Metric,
}

/// Aggregation applied to a metric.
///
/// Ad-hoc results are already aggregated by the user's SQL, so only the
/// pass-through `Number` aggregation is ever inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricAggregation {
    Number,
}

/// How a field is laid out when used as an x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    Category,
    Time,
    Value,
}

/// A column in an ad-hoc SQL result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type", default)]
    pub scalar_type: ScalarType,
}

impl Column {
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
        }
    }
}

/// A raw result row keyed by column name.
pub type RawRow = serde_json::Map<String, serde_json::Value>;

/// Build the id of a field from its owning table and column name.
///
/// The same string namespaces the column's cells in normalized rows.
pub fn field_id(table: &str, name: &str) -> String {
    format!("{}_{}", table, name)
}
