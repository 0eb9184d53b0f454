use serde_json::json;
use sqlchart::config::Settings;
use sqlchart::model::{
    CartesianLayout, ChartConfig, ChartKind, Column, PieLayout, RawRow, ScalarType,
};
use sqlchart::session::{QueryResults, SessionEvent, VisualizationSession};

fn row(region: &str, segment: &str, revenue: i64) -> RawRow {
    json!({"region": region, "segment": segment, "revenue": revenue})
        .as_object()
        .unwrap()
        .clone()
}

fn results(columns: &[(&str, ScalarType)]) -> QueryResults {
    QueryResults::new(
        columns
            .iter()
            .map(|(name, ty)| Column::new(*name, *ty))
            .collect(),
        vec![row("west", "smb", 10), row("east", "enterprise", 20)],
    )
}

fn full_results() -> QueryResults {
    results(&[
        ("region", ScalarType::String),
        ("segment", ScalarType::String),
        ("revenue", ScalarType::Number),
    ])
}

#[test]
fn test_user_selection_survives_rerun() {
    let mut session = VisualizationSession::default();
    session.on_new_results(&full_results());

    let edited = ChartConfig::Bar(CartesianLayout {
        x_field: Some("sql_runner_segment".to_string()),
        y_fields: vec!["sql_runner_revenue".to_string()],
        group_by: Some("sql_runner_region".to_string()),
        flip_axes: true,
        stack: true,
    });
    session.set_chart_config(edited.clone());

    assert!(!session.on_new_results(&full_results()));
    assert_eq!(session.chart_config(), &edited);
}

#[test]
fn test_dropped_column_falls_back_to_default() {
    let mut session = VisualizationSession::default();
    session.on_new_results(&full_results());
    session.set_chart_config(ChartConfig::Bar(CartesianLayout {
        x_field: Some("sql_runner_segment".to_string()),
        y_fields: vec!["sql_runner_revenue".to_string()],
        group_by: Some("sql_runner_region".to_string()),
        ..CartesianLayout::default()
    }));

    // The query no longer selects `segment`.
    session.on_new_results(&results(&[
        ("region", ScalarType::String),
        ("revenue", ScalarType::Number),
    ]));

    let ChartConfig::Bar(layout) = session.chart_config() else {
        panic!("expected a bar chart");
    };
    assert_eq!(layout.x_field.as_deref(), Some("sql_runner_region"));
    assert_eq!(layout.group_by, None);
    assert!(!session
        .chart_config()
        .field_references()
        .contains(&"sql_runner_segment"));
}

#[test]
fn test_saved_chart_load_is_pure_replace() {
    let saved = ChartConfig::Pie(PieLayout {
        group_field: Some("sql_runner_no_longer_there".to_string()),
        metric_field: None,
        donut: true,
    });

    for previous in [
        ChartConfig::default_for(ChartKind::Pie),
        ChartConfig::Pie(PieLayout {
            group_field: Some("sql_runner_segment".to_string()),
            metric_field: Some("sql_runner_revenue".to_string()),
            donut: false,
        }),
    ] {
        let mut session = VisualizationSession::from_saved(&Settings::default(), previous);
        session.on_new_results(&full_results());

        assert!(session.handle(SessionEvent::LoadSavedChart {
            config: saved.clone()
        }));
        assert_eq!(session.chart_config(), &saved);
    }
}

#[test]
fn test_saved_chart_load_ignores_other_kind() {
    let mut session = VisualizationSession::default();
    session.on_new_results(&full_results());
    let before = session.chart_config().clone();
    let revision = session.config_revision();

    let applied = session.handle(SessionEvent::LoadSavedChart {
        config: ChartConfig::default_for(ChartKind::Table),
    });

    assert!(!applied);
    assert_eq!(session.chart_config(), &before);
    assert_eq!(session.config_revision(), revision);
}

#[test]
fn test_last_results_win() {
    let mut session = VisualizationSession::default();
    session.on_new_results(&full_results());
    session.on_new_results(&results(&[("revenue", ScalarType::Number)]));

    let result = session.normalized_result().unwrap();
    assert!(result.dimension_ids.is_empty());
    assert_eq!(result.metric_ids, vec!["sql_runner_revenue"]);
    assert_eq!(session.pivot_options().group_by.len(), 0);

    let request = session.create_saved_chart().unwrap();
    assert_eq!(request.table_config.column_order, vec!["sql_runner_revenue"]);
}

#[test]
fn test_request_dimensions_precede_metrics() {
    let mut session = VisualizationSession::default();
    session.on_new_results(&results(&[
        ("revenue", ScalarType::Number),
        ("region", ScalarType::String),
        ("segment", ScalarType::String),
    ]));

    let request = session.create_saved_chart().unwrap();
    assert_eq!(
        request.table_config.column_order,
        vec!["sql_runner_region", "sql_runner_segment", "sql_runner_revenue"]
    );
    assert_eq!(request.metric_query.metrics, vec!["sql_runner_revenue"]);
    assert_eq!(request.pivot_config, None);
}

#[test]
fn test_configured_table_name_and_kind() {
    let settings = Settings::from_toml(
        r#"
[sql_runner]
table_name = "adhoc"
default_chart_kind = "table"
"#,
    )
    .unwrap();
    let mut session = VisualizationSession::new(&settings);
    session.on_new_results(&full_results());

    let ChartConfig::Table(table) = session.chart_config() else {
        panic!("expected a table chart");
    };
    assert!(table.columns.contains_key("adhoc_region"));
    assert_eq!(session.create_saved_chart().unwrap().table_name, "adhoc");
}

#[test]
fn test_output_serializes() {
    let mut session = VisualizationSession::default();
    session.on_new_results(&full_results());

    let output = serde_json::to_value(session.output()).unwrap();
    assert_eq!(output["chart_config"]["type"], "bar");
    assert_eq!(output["pivot_options"]["y_axis"][0]["field_id"], "sql_runner_revenue");
    assert_eq!(output["normalized_result"]["rows"].as_array().unwrap().len(), 2);
    assert_eq!(output["create_saved_chart"]["table_name"], "sql_runner");
}
