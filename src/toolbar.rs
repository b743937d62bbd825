//! Toolbar input — the four column counts as the browser submits them.
//!
//! Fields arrive as JSON numbers, numeric strings, empty strings, or not at
//! all. Anything that is not a non-negative integer counts as zero; there is
//! no upper bound.

use serde::Deserialize;
use serde_json::Value;

use crate::grid::builder::GridShape;

/// Raw toolbar submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolbarInput {
    #[serde(default)]
    pub text_columns: Option<Value>,
    #[serde(default)]
    pub template_button_columns: Option<Value>,
    #[serde(default)]
    pub component_button_columns: Option<Value>,
    #[serde(default)]
    pub component_combo_box_columns: Option<Value>,
}

impl ToolbarInput {
    /// Coalesce every field to a column count.
    #[must_use]
    pub fn shape(&self) -> GridShape {
        GridShape::new(
            count(self.text_columns.as_ref()),
            count(self.template_button_columns.as_ref()),
            count(self.component_button_columns.as_ref()),
            count(self.component_combo_box_columns.as_ref()),
        )
    }
}

/// Parse one field. Missing, blank, unparseable, and negative values are 0.
#[must_use]
pub fn count(raw: Option<&Value>) -> usize {
    let parsed: Option<i64> = match raw {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_or(None, Some),
        _ => None,
    };
    parsed.map_or(0, |n| usize::try_from(n).unwrap_or(0))
}

#[cfg(test)]
#[path = "toolbar_test.rs"]
mod tests;
