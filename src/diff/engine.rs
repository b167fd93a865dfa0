//! Core structural diff engine.
//! Walks two JSON trees in lock-step and records every difference by category.

use serde_json::{Number, Value};

use super::schema::{
    DiffReport, DICTIONARY_ITEM_ADDED, DICTIONARY_ITEM_REMOVED, ITERABLE_ITEM_ADDED,
    ITERABLE_ITEM_REMOVED, TYPE_CHANGES, VALUES_CHANGED,
};
use crate::utils::config::{DEFAULT_SIGNIFICANT_DIGITS, ROOT_MARKER};

/// Structural comparison of two documents, producing a categorized report
///
/// The trait exists so callers that only need the grouping and rendering
/// stages can substitute a canned comparison in tests.
pub trait DiffEngine {
    /// Compare two values and report every difference found
    ///
    /// # Arguments
    /// * `left` - Baseline document or sub-tree
    /// * `right` - Candidate document or sub-tree
    ///
    /// # Returns
    /// DiffReport with one bracket path per difference, keyed by category
    fn compare(&self, left: &Value, right: &Value) -> DiffReport;
}

/// Numeric comparison settings for the diff walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffTolerance {
    /// Treat integer and float as the same type when comparing numbers
    pub ignore_numeric_type_changes: bool,

    /// Decimal places compared before a numeric difference is reported;
    /// `None` compares exactly
    pub significant_digits: Option<u32>,
}

impl Default for DiffTolerance {
    fn default() -> Self {
        Self {
            ignore_numeric_type_changes: true,
            significant_digits: Some(DEFAULT_SIGNIFICANT_DIGITS),
        }
    }
}

/// Recursive position-for-position comparison of two JSON trees
///
/// Objects are compared by key, arrays by index over their shared length.
/// Surplus keys and elements are recorded as added or removed depending
/// on which side carries them.
///
/// # Example
/// ```ignore
/// use diffnav::diff::{DiffEngine, StructuralDiff};
/// use serde_json::json;
///
/// let engine = StructuralDiff::default();
/// let report = engine.compare(&json!({"a": 1}), &json!({"a": 2}));
/// assert_eq!(report.total_entries(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StructuralDiff {
    tolerance: DiffTolerance,
}

impl StructuralDiff {
    /// Create an engine with explicit tolerance settings
    pub fn new(tolerance: DiffTolerance) -> Self {
        Self { tolerance }
    }

    fn walk(&self, left: &Value, right: &Value, path: &str, report: &mut DiffReport) {
        match (left, right) {
            (Value::Object(left_map), Value::Object(right_map)) => {
                for (key, left_child) in left_map {
                    let child_path = format!("{path}['{key}']");
                    match right_map.get(key) {
                        Some(right_child) => self.walk(left_child, right_child, &child_path, report),
                        None => report.record(DICTIONARY_ITEM_REMOVED, child_path),
                    }
                }
                for key in right_map.keys() {
                    if !left_map.contains_key(key) {
                        report.record(DICTIONARY_ITEM_ADDED, format!("{path}['{key}']"));
                    }
                }
            }
            (Value::Array(left_items), Value::Array(right_items)) => {
                let shared = left_items.len().min(right_items.len());
                for (index, (left_child, right_child)) in
                    left_items.iter().zip(right_items.iter()).enumerate()
                {
                    self.walk(left_child, right_child, &format!("{path}[{index}]"), report);
                }
                for index in shared..left_items.len() {
                    report.record(ITERABLE_ITEM_REMOVED, format!("{path}[{index}]"));
                }
                for index in shared..right_items.len() {
                    report.record(ITERABLE_ITEM_ADDED, format!("{path}[{index}]"));
                }
            }
            (Value::Number(left_num), Value::Number(right_num)) => {
                // Integer vs float is only a type change when the caller
                // asks for strict numeric types
                if !self.tolerance.ignore_numeric_type_changes
                    && left_num.is_f64() != right_num.is_f64()
                {
                    report.record(TYPE_CHANGES, path.to_string());
                } else if !self.numbers_equal(left_num, right_num) {
                    report.record(VALUES_CHANGED, path.to_string());
                }
            }
            (Value::String(left_str), Value::String(right_str)) => {
                if left_str != right_str {
                    report.record(VALUES_CHANGED, path.to_string());
                }
            }
            (Value::Bool(left_bool), Value::Bool(right_bool)) => {
                if left_bool != right_bool {
                    report.record(VALUES_CHANGED, path.to_string());
                }
            }
            (Value::Null, Value::Null) => {}
            _ => report.record(TYPE_CHANGES, path.to_string()),
        }
    }

    /// Compare two JSON numbers under the configured tolerance
    ///
    /// Pure integers compare exactly. As soon as a float is involved both
    /// sides are formatted to the configured number of decimal places and
    /// the renderings are compared, so differences below the threshold
    /// disappear.
    fn numbers_equal(&self, left: &Number, right: &Number) -> bool {
        if !left.is_f64() && !right.is_f64() {
            return integer_value(left) == integer_value(right);
        }
        match (left.as_f64(), right.as_f64()) {
            (Some(left_float), Some(right_float)) => match self.tolerance.significant_digits {
                Some(digits) => {
                    let digits = digits as usize;
                    format!("{left_float:.digits$}") == format!("{right_float:.digits$}")
                }
                None => left_float == right_float,
            },
            _ => left == right,
        }
    }
}

impl DiffEngine for StructuralDiff {
    fn compare(&self, left: &Value, right: &Value) -> DiffReport {
        let mut report = DiffReport::default();
        self.walk(left, right, ROOT_MARKER, &mut report);
        report
    }
}

/// Widen an integer JSON number so i64 and u64 storage compare directly
fn integer_value(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}

// ============================================================
// Tests
// ============================================================
