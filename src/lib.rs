//! # sqlchart
//!
//! Turns ad-hoc SQL result sets into renderable chart configurations.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │         Query Results (columns + raw rows)               │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [inference]
//! ┌─────────────────────────────────────────────────────────┐
//! │          FieldModel (dimensions / metrics)               │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [normalize]
//! ┌─────────────────────────────────────────────────────────┐
//! │    NormalizedResult (keyed {raw, formatted} rows)        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [pivot]
//! ┌─────────────────────────────────────────────────────────┐
//! │          PivotOptions (x / y / group-by)                 │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [merge]
//! ┌─────────────────────────────────────────────────────────┐
//! │   ChartConfig (previous selections kept when valid)      │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [session]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Renderer payload + CreateSavedChart request          │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod inference;
pub mod input;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod pivot;
pub mod session;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::inference::{infer, InferenceOptions, LabelStyle};
    pub use crate::merge::{merge, merge_outcome, MergeOutcome};
    pub use crate::model::{
        CartesianLayout, ChartConfig, ChartKind, Column, FieldDescriptor, FieldKind, FieldModel,
        PieLayout, RawRow, ScalarType, TableColumn, TableLayout,
    };
    pub use crate::normalize::{normalize, NormalizedResult};
    pub use crate::pivot::{resolve_pivot_options, PivotOptions};
    pub use crate::session::{
        CreateSavedChart, QueryResults, SessionEvent, SessionOutput, VisualizationSession,
    };
}

pub use model::{ChartConfig, ChartKind, Column, ScalarType};
pub use session::{QueryResults, SessionEvent, VisualizationSession};
