//! Human-friendly labels for result columns.
//!
//! Uses the `inflector` crate for case conversion after collapsing runs of
//! whitespace.

use inflector::Inflector;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// How column names are turned into display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `order_date` → `Order date`
    #[default]
    Sentence,
    /// `order_date` → `Order Date`
    Title,
    /// Original name with whitespace collapsed.
    Verbatim,
}

/// Convert a column name into a display label.
///
/// # Examples
/// ```ignore
/// assert_eq!(friendly_name("order_date", LabelStyle::Sentence), "Order date");
/// assert_eq!(friendly_name("orderDate", LabelStyle::Title), "Order Date");
/// ```
pub fn friendly_name(name: &str, style: LabelStyle) -> String {
    let collapsed = WHITESPACE.replace_all(name.trim(), " ");
    let text: &str = collapsed.as_ref();
    if text.is_empty() {
        return String::new();
    }

    match style {
        LabelStyle::Sentence => text.to_sentence_case(),
        LabelStyle::Title => text.to_title_case(),
        LabelStyle::Verbatim => text.to_string(),
    }
}
