use serde_json::{json, Value};
use sqlchart::inference::{infer, InferenceOptions};
use sqlchart::model::{Column, FieldKind, RawRow, ScalarType};
use sqlchart::normalize::normalize;
use sqlchart::pivot::resolve_pivot_options;
use sqlchart::session::{QueryResults, VisualizationSession};

fn rows(value: Value) -> Vec<RawRow> {
    value
        .as_array()
        .expect("rows must be an array")
        .iter()
        .map(|r| r.as_object().expect("row must be an object").clone())
        .collect()
}

fn region_revenue() -> Vec<Column> {
    vec![
        Column::new("region", ScalarType::String),
        Column::new("revenue", ScalarType::Number),
    ]
}

#[test]
fn test_region_revenue_example() {
    let columns = region_revenue();
    let rows = rows(json!([{"region": "west", "revenue": 100}]));
    let options = InferenceOptions::default();

    let model = infer(&columns, &options);
    assert_eq!(model.dimension_ids(), vec!["sql_runner_region"]);
    assert_eq!(model.metric_ids(), vec!["sql_runner_revenue"]);

    let result = normalize(Some(&columns[..]), Some(&rows[..]), &options).unwrap();
    assert_eq!(
        serde_json::to_value(&result.rows).unwrap(),
        json!([{
            "sql_runner_region": {"value": {"raw": "west", "formatted": "west"}},
            "sql_runner_revenue": {"value": {"raw": 100, "formatted": "100"}},
        }])
    );

    let mut session = VisualizationSession::default();
    session.on_new_results(&QueryResults::new(columns, rows));
    let request = session.create_saved_chart().unwrap();
    assert_eq!(
        request.table_config.column_order,
        vec!["sql_runner_region", "sql_runner_revenue"]
    );
}

#[test]
fn test_rows_without_columns() {
    let rows = rows(json!([{"region": "west", "revenue": 100}]));
    assert!(normalize(None, Some(&rows[..]), &InferenceOptions::default()).is_none());

    let mut session = VisualizationSession::default();
    session.on_new_results(&QueryResults {
        columns: None,
        rows: Some(rows),
    });
    assert!(session.create_saved_chart().is_none());
}

#[test]
fn test_partition_covers_every_column() {
    let columns = vec![
        Column::new("a", ScalarType::String),
        Column::new("b", ScalarType::Number),
        Column::new("c", ScalarType::Date),
        Column::new("d", ScalarType::Timestamp),
        Column::new("e", ScalarType::Boolean),
        Column::new("f", ScalarType::Number),
    ];
    let model = infer(&columns, &InferenceOptions::default());

    assert_eq!(model.len(), columns.len());
    for column in &columns {
        let id = format!("sql_runner_{}", column.name);
        let in_dimensions = model.dimensions.contains_key(&id);
        let in_metrics = model.metrics.contains_key(&id);

        assert!(in_dimensions != in_metrics, "{} must be in exactly one map", id);
        assert_eq!(in_metrics, column.scalar_type == ScalarType::Number);
        assert_eq!(
            model.get(&id).unwrap().kind,
            if in_metrics {
                FieldKind::Metric
            } else {
                FieldKind::Dimension
            }
        );
    }
}

#[test]
fn test_row_count_and_order_preserved() {
    let columns = region_revenue();
    let rows = rows(json!([
        {"region": "north", "revenue": 3},
        {"region": "south", "revenue": 1.5},
        {"region": "north", "revenue": 3},
        {"region": null, "revenue": null},
    ]));
    let result = normalize(Some(&columns[..]), Some(&rows[..]), &InferenceOptions::default())
        .unwrap();

    assert_eq!(result.rows.len(), rows.len());
    let formatted: Vec<(&str, &str)> = result
        .rows
        .iter()
        .map(|r| {
            (
                r["sql_runner_region"].value.formatted.as_str(),
                r["sql_runner_revenue"].value.formatted.as_str(),
            )
        })
        .collect();
    assert_eq!(
        formatted,
        vec![
            ("north", "3"),
            ("south", "1.5"),
            ("north", "3"),
            ("null", "null")
        ]
    );
}

#[test]
fn test_empty_result_set() {
    let result =
        normalize(Some([].as_slice()), Some([].as_slice()), &InferenceOptions::default()).unwrap();
    assert!(result.rows.is_empty());
    assert!(result.fields.is_empty());
    assert!(resolve_pivot_options(&result.field_model()).is_empty());
}

#[test]
fn test_explore_resolves_fields() {
    let columns = region_revenue();
    let result = normalize(Some(&columns[..]), Some([].as_slice()), &InferenceOptions::default())
        .unwrap();

    for id in result.column_order() {
        let field = result.explore.field(&id).unwrap();
        assert_eq!(field, &result.fields[&id]);
    }
}
