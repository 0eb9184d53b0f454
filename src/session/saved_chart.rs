//! The "create saved chart" request derived from a session.

use serde::{Deserialize, Serialize};

use crate::model::ChartConfig;
use crate::normalize::NormalizedResult;

/// Minimal query descriptor; ad-hoc SQL carries no filters, sorts or limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricQuery {
    pub explore_name: String,
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PivotConfig {
    pub columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Dimensions, then metrics.
    pub column_order: Vec<String>,
}

/// Request body for persisting the chart being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSavedChart {
    pub table_name: String,
    pub metric_query: MetricQuery,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot_config: Option<PivotConfig>,
    pub chart_config: ChartConfig,
    pub table_config: TableConfig,
}

impl CreateSavedChart {
    /// Project a normalized result and the session's selections into a
    /// request.
    ///
    /// Pivot columns naming fields absent from the result are left out; no
    /// remaining column means no pivot config.
    pub fn build(
        result: &NormalizedResult,
        pivot_fields: Option<&[String]>,
        chart_config: &ChartConfig,
    ) -> Self {
        let table_name = result.table_name().to_string();

        let pivot_config = pivot_fields
            .map(|fields| {
                fields
                    .iter()
                    .filter(|id| result.field(id).is_some())
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .filter(|columns| !columns.is_empty())
            .map(|columns| PivotConfig { columns });

        Self {
            metric_query: MetricQuery {
                explore_name: table_name.clone(),
                dimensions: result.dimension_ids.clone(),
                metrics: result.metric_ids.clone(),
            },
            table_name,
            pivot_config,
            chart_config: chart_config.clone(),
            table_config: TableConfig {
                column_order: result.column_order(),
            },
        }
    }
}
