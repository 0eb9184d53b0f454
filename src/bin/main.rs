//! sqlchart CLI - Turn SQL result sets into chart configurations
//!
//! Usage:
//!   sqlchart fields <results.json>
//!   sqlchart chart <results.json> [--kind <kind>] [--previous <config.json>]
//!
//! Examples:
//!   sqlchart fields results.json
//!   sqlchart chart results.json --kind line --previous chart.json
//!   sqlchart chart results.json --saved saved_pie.json --kind pie

use clap::{Parser, Subcommand};
use sqlchart::config::Settings;
use sqlchart::inference::{infer, InferenceOptions};
use sqlchart::input::{read_chart_config, read_results};
use sqlchart::model::ChartKind;
use sqlchart::session::{SessionEvent, VisualizationSession};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlchart")]
#[command(about = "sqlchart - Turn SQL result sets into chart configurations")]
#[command(version)]
struct Cli {
    /// Path to a settings file (defaults to the usual lookup locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the inferred dimensions and metrics of a result set
    Fields {
        /// Path to a {columns, rows} JSON document
        results: PathBuf,
    },

    /// Build the chart payload for a result set
    Chart {
        /// Path to a {columns, rows} JSON document
        results: PathBuf,

        /// Chart kind to produce (defaults to the configured kind)
        #[arg(short, long, value_parser = parse_kind)]
        kind: Option<ChartKind>,

        /// Previously edited chart config to merge into
        #[arg(short, long)]
        previous: Option<PathBuf>,

        /// Saved chart config to load after the results
        #[arg(short, long)]
        saved: Option<PathBuf>,

        /// Field ids to pivot on
        #[arg(long = "pivot")]
        pivot: Vec<String>,
    },
}

fn parse_kind(s: &str) -> Result<ChartKind, String> {
    ChartKind::parse(s)
        .ok_or_else(|| format!("unknown chart kind '{}' (expected bar, line, pie or table)", s))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Fields { results } => cmd_fields(&settings, results),
        Commands::Chart {
            results,
            kind,
            previous,
            saved,
            pivot,
        } => cmd_chart(&settings, results, kind, previous, saved, pivot),
    }
}

fn cmd_fields(settings: &Settings, path: PathBuf) -> ExitCode {
    let results = match read_results(&path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let Some(columns) = results.columns else {
        eprintln!("No columns in {}", path.display());
        return ExitCode::FAILURE;
    };

    let options = InferenceOptions::from_settings(settings);
    let model = infer(&columns, &options);

    println!("Dimensions ({}):", model.dimensions.len());
    for field in model.dimensions.values() {
        println!("  {} [{:?}] \"{}\"", field.id, field.scalar_type, field.label);
    }
    println!();
    println!("Metrics ({}):", model.metrics.len());
    for field in model.metrics.values() {
        println!("  {} [{:?}] \"{}\"", field.id, field.scalar_type, field.label);
    }

    ExitCode::SUCCESS
}

fn cmd_chart(
    settings: &Settings,
    results: PathBuf,
    kind: Option<ChartKind>,
    previous: Option<PathBuf>,
    saved: Option<PathBuf>,
    pivot: Vec<String>,
) -> ExitCode {
    let results = match read_results(&results) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = match previous.map(read_chart_config).transpose() {
        Ok(Some(config)) => VisualizationSession::from_saved(settings, config),
        Ok(None) => VisualizationSession::new(settings),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(kind) = kind {
        session.set_chart_type(kind);
    }
    if !pivot.is_empty() {
        session.set_pivot_fields(Some(pivot));
    }

    session.handle(SessionEvent::NewResults(results));

    if let Some(path) = saved {
        match read_chart_config(&path) {
            Ok(config) if config.kind() != session.chart_kind() => {
                eprintln!(
                    "Saved chart {} is not a {} chart, ignored",
                    path.display(),
                    session.chart_kind()
                );
            }
            Ok(config) => {
                session.handle(SessionEvent::LoadSavedChart { config });
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    match serde_json::to_string_pretty(&session.output()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
