//! Config merge engine.
//!
//! Reconciles a previous chart configuration with freshly resolved pivot
//! options. For every slot of the target chart kind the previous selection is
//! kept when its field still exists, otherwise the slot falls back to a
//! kind-specific default. References to vanished fields never survive.
//!
//! Merging is idempotent: merging an already merged configuration against the
//! same options returns it unchanged.

mod cartesian;
mod pie;
mod table;

use serde::Serialize;

use crate::model::{ChartConfig, ChartKind};
use crate::pivot::PivotOptions;

/// Per-kind reconciliation of a layout against the current options.
pub trait Reconcile: Sized {
    fn reconcile(self, options: &PivotOptions) -> Self;
}

/// A merged configuration published together with the options it was merged
/// against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergeOutcome {
    pub config: ChartConfig,
    pub options: PivotOptions,
}

/// Merge `previous` into a configuration of `kind`.
///
/// A missing previous configuration starts from the kind's empty default; one
/// of another kind is coerced first.
pub fn merge(
    kind: ChartKind,
    previous: Option<ChartConfig>,
    options: &PivotOptions,
) -> ChartConfig {
    let base = match previous {
        Some(config) => config.coerce(kind),
        None => ChartConfig::default_for(kind),
    };

    match base {
        ChartConfig::Bar(layout) => ChartConfig::Bar(layout.reconcile(options)),
        ChartConfig::Line(layout) => ChartConfig::Line(layout.reconcile(options)),
        ChartConfig::Pie(layout) => ChartConfig::Pie(layout.reconcile(options)),
        ChartConfig::Table(layout) => ChartConfig::Table(layout.reconcile(options)),
    }
}

/// Merge and publish the options alongside the result.
pub fn merge_outcome(
    kind: ChartKind,
    previous: Option<ChartConfig>,
    options: PivotOptions,
) -> MergeOutcome {
    let config = merge(kind, previous, &options);
    MergeOutcome { config, options }
}
