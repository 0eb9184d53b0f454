use sqlchart::inference::{infer, InferenceOptions};
use sqlchart::merge::merge;
use sqlchart::model::{
    CartesianLayout, ChartConfig, ChartKind, Column, PieLayout, ScalarType, TableColumn,
    TableLayout,
};
use sqlchart::pivot::{resolve_pivot_options, PivotOptions};

const KINDS: [ChartKind; 4] = [
    ChartKind::Bar,
    ChartKind::Line,
    ChartKind::Pie,
    ChartKind::Table,
];

fn options_for(columns: &[(&str, ScalarType)]) -> PivotOptions {
    let columns: Vec<Column> = columns
        .iter()
        .map(|(name, ty)| Column::new(*name, *ty))
        .collect();
    resolve_pivot_options(&infer(&columns, &InferenceOptions::default()))
}

/// Result shapes the query may take between runs.
fn result_shapes() -> Vec<PivotOptions> {
    vec![
        PivotOptions::default(),
        options_for(&[("only_dim", ScalarType::String)]),
        options_for(&[("only_metric", ScalarType::Number)]),
        options_for(&[
            ("region", ScalarType::String),
            ("revenue", ScalarType::Number),
        ]),
        options_for(&[
            ("day", ScalarType::Date),
            ("region", ScalarType::String),
            ("revenue", ScalarType::Number),
            ("cost", ScalarType::Number),
        ]),
    ]
}

fn id(name: &str) -> String {
    format!("sql_runner_{}", name)
}

/// Configurations a user may have edited, referencing fields from every shape.
fn previous_configs() -> Vec<Option<ChartConfig>> {
    let cartesian = CartesianLayout {
        x_field: Some(id("day")),
        y_fields: vec![id("cost"), id("only_metric"), id("revenue")],
        group_by: Some(id("region")),
        flip_axes: true,
        stack: true,
    };
    let mut table = TableLayout::default();
    for (name, visible) in [("cost", false), ("only_dim", true), ("region", true)] {
        table.columns.insert(
            id(name),
            TableColumn {
                visible,
                label: name.to_uppercase(),
                frozen: false,
            },
        );
    }

    vec![
        None,
        Some(ChartConfig::Bar(cartesian.clone())),
        Some(ChartConfig::Line(cartesian)),
        Some(ChartConfig::Pie(PieLayout {
            group_field: Some(id("region")),
            metric_field: Some(id("cost")),
            donut: true,
        })),
        Some(ChartConfig::Table(table)),
    ]
}

#[test]
fn test_merge_idempotent_for_all_shapes() {
    for options in result_shapes() {
        for kind in KINDS {
            for previous in previous_configs() {
                let once = merge(kind, previous.clone(), &options);
                let twice = merge(kind, Some(once.clone()), &options);
                assert_eq!(once, twice, "{} merge of {:?} not idempotent", kind, previous);
            }
        }
    }
}

#[test]
fn test_merge_never_keeps_unknown_ids() {
    for options in result_shapes() {
        for kind in KINDS {
            for previous in previous_configs() {
                let merged = merge(kind, previous, &options);
                assert_eq!(merged.kind(), kind);
                for reference in merged.field_references() {
                    assert!(
                        options.has_x(reference),
                        "{} references unknown field {}",
                        kind,
                        reference
                    );
                }
            }
        }
    }
}

#[test]
fn test_table_settings_survive_shape_change() {
    let options = options_for(&[
        ("region", ScalarType::String),
        ("cost", ScalarType::Number),
    ]);
    let previous = previous_configs().pop().flatten();

    let ChartConfig::Table(table) = merge(ChartKind::Table, previous, &options) else {
        panic!("expected a table chart");
    };
    let ids: Vec<&str> = table.columns.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["sql_runner_cost", "sql_runner_region"]);
    assert!(!table.columns["sql_runner_cost"].visible);
    assert_eq!(table.columns["sql_runner_cost"].label, "COST");
}

#[test]
fn test_cartesian_keeps_surviving_y_fields_in_order() {
    let options = options_for(&[
        ("day", ScalarType::Date),
        ("revenue", ScalarType::Number),
        ("cost", ScalarType::Number),
    ]);
    let previous = previous_configs().into_iter().nth(1).flatten();

    let ChartConfig::Bar(layout) = merge(ChartKind::Bar, previous, &options) else {
        panic!("expected a bar chart");
    };
    assert_eq!(layout.x_field, Some(id("day")));
    assert_eq!(layout.y_fields, vec![id("cost"), id("revenue")]);
    assert_eq!(layout.group_by, None);
    assert!(layout.flip_axes);
    assert!(layout.stack);
}

#[test]
fn test_only_dimensions_leaves_value_slots_empty() {
    let options = options_for(&[("only_dim", ScalarType::String)]);

    let ChartConfig::Pie(pie) = merge(ChartKind::Pie, None, &options) else {
        panic!("expected a pie chart");
    };
    assert_eq!(pie.group_field, Some(id("only_dim")));
    assert_eq!(pie.metric_field, None);

    let ChartConfig::Line(line) = merge(ChartKind::Line, None, &options) else {
        panic!("expected a line chart");
    };
    assert!(line.y_fields.is_empty());
}
