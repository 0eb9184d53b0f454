//! Plain string coercion of raw cell values.
//!
//! No locale or number formatting happens here; that belongs to the renderer.

use serde_json::Value;

/// Largest magnitude at which every integral `f64` is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Coerce a raw cell value to its display string.
#[must_use]
pub fn format_raw(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                return n.to_string();
            }
            match n.as_f64() {
                Some(f) => format_float(f),
                None => n.to_string(),
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(format_raw).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        // -0.0 prints as "0"
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}
