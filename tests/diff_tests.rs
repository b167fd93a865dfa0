//! Integration tests for the structural diff engine.
//!
//! Exercises every change category, the numeric tolerance settings, and
//! the report schema the rest of the pipeline consumes.

use diffnav::diff::{
    DiffEngine, DiffTolerance, StructuralDiff, DICTIONARY_ITEM_ADDED, DICTIONARY_ITEM_REMOVED,
    ITERABLE_ITEM_ADDED, ITERABLE_ITEM_REMOVED, TYPE_CHANGES, VALUES_CHANGED,
};
use serde_json::json;

// ============================================================================
// SHARED TEST HELPERS
// ============================================================================

fn strict_engine() -> StructuralDiff {
    StructuralDiff::new(DiffTolerance {
        ignore_numeric_type_changes: false,
        significant_digits: Some(3),
    })
}

fn exact_engine() -> StructuralDiff {
    StructuralDiff::new(DiffTolerance {
        ignore_numeric_type_changes: true,
        significant_digits: None,
    })
}

// ============================================================================
// CATEGORY COVERAGE
// ============================================================================

#[test]
fn test_every_category_is_reported() {
    let left = json!({
        "changed": 1,
        "typed": "x",
        "gone": true,
        "shrink": [1, 2, 3],
        "grow": [1]
    });
    let right = json!({
        "changed": 2,
        "typed": 7,
        "shrink": [1, 2],
        "grow": [1, 5],
        "new": true
    });

    let report = StructuralDiff::default().compare(&left, &right);

    assert_eq!(
        report.categories.get(VALUES_CHANGED),
        Some(&vec!["root['changed']".to_string()])
    );
    assert_eq!(
        report.categories.get(TYPE_CHANGES),
        Some(&vec!["root['typed']".to_string()])
    );
    assert_eq!(
        report.categories.get(DICTIONARY_ITEM_REMOVED),
        Some(&vec!["root['gone']".to_string()])
    );
    assert_eq!(
        report.categories.get(DICTIONARY_ITEM_ADDED),
        Some(&vec!["root['new']".to_string()])
    );
    assert_eq!(
        report.categories.get(ITERABLE_ITEM_REMOVED),
        Some(&vec!["root['shrink'][2]".to_string()])
    );
    assert_eq!(
        report.categories.get(ITERABLE_ITEM_ADDED),
        Some(&vec!["root['grow'][1]".to_string()])
    );
}

#[test]
fn test_categories_appear_in_discovery_order() {
    let left = json!({"changed": 1, "gone": true});
    let right = json!({"changed": 2, "new": false});
    let report = StructuralDiff::default().compare(&left, &right);

    let order: Vec<&str> = report.categories().map(|(name, _)| name).collect();
    assert_eq!(
        order,
        vec![VALUES_CHANGED, DICTIONARY_ITEM_REMOVED, DICTIONARY_ITEM_ADDED]
    );
}

#[test]
fn test_deep_nesting_builds_full_bracket_paths() {
    let left = json!({"a": [{"b": {"c": [0, 1]}}]});
    let right = json!({"a": [{"b": {"c": [0, 2]}}]});
    let report = StructuralDiff::default().compare(&left, &right);

    assert_eq!(
        report.categories.get(VALUES_CHANGED),
        Some(&vec!["root['a'][0]['b']['c'][1]".to_string()])
    );
}

#[test]
fn test_added_filter_only_drops_added_categories() {
    let left = json!({"gone": 1, "shrink": [1, 2]});
    let right = json!({"new": 1, "shrink": [1], "grow": [9]});

    let mut report = StructuralDiff::default().compare(&left, &right);
    report.drop_added_categories();

    assert!(report.categories.get(DICTIONARY_ITEM_ADDED).is_none());
    assert!(report.categories.get(ITERABLE_ITEM_ADDED).is_none());
    assert!(report.categories.get(DICTIONARY_ITEM_REMOVED).is_some());
    assert!(report.categories.get(ITERABLE_ITEM_REMOVED).is_some());
}

// ============================================================================
// NUMERIC TOLERANCE
// ============================================================================

#[test]
fn test_default_tolerance_hides_sub_threshold_drift() {
    let left = json!({"value": 2.71828});
    let right = json!({"value": 2.71834});
    let report = StructuralDiff::default().compare(&left, &right);
    assert!(report.is_empty());
}

#[test]
fn test_default_tolerance_reports_visible_drift() {
    let left = json!({"value": 1.234});
    let right = json!({"value": 1.236});
    let report = StructuralDiff::default().compare(&left, &right);
    assert_eq!(report.total_entries(), 1);
}

#[test]
fn test_exact_mode_sees_representation_noise() {
    let left = json!(0.1_f64 + 0.2_f64);
    let right = json!(0.3);

    assert!(StructuralDiff::default().compare(&left, &right).is_empty());
    assert_eq!(exact_engine().compare(&left, &right).total_entries(), 1);
}

#[test]
fn test_int_float_pairs_respect_type_strictness() {
    let left = json!({"count": 5});
    let right = json!({"count": 5.0});

    assert!(StructuralDiff::default().compare(&left, &right).is_empty());

    let report = strict_engine().compare(&left, &right);
    assert_eq!(
        report.categories.get(TYPE_CHANGES),
        Some(&vec!["root['count']".to_string()])
    );
}

#[test]
fn test_int_float_mix_compares_numerically_when_tolerant() {
    let left = json!({"count": 5});
    let right = json!({"count": 5.4});
    let report = StructuralDiff::default().compare(&left, &right);

    assert_eq!(
        report.categories.get(VALUES_CHANGED),
        Some(&vec!["root['count']".to_string()])
    );
}

#[test]
fn test_integers_always_compare_exactly() {
    // Integer differences are never masked by the decimal threshold
    let left = json!({"total": 1000});
    let right = json!({"total": 1001});
    let report = StructuralDiff::default().compare(&left, &right);
    assert_eq!(report.total_entries(), 1);
}

#[test]
fn test_signed_unsigned_boundary() {
    let left = json!(i64::MIN);
    let right = json!(u64::MAX);
    let report = StructuralDiff::default().compare(&left, &right);
    assert_eq!(report.total_entries(), 1);
}

// ============================================================================
// REPORT SCHEMA
// ============================================================================

#[test]
fn test_report_serializes_as_category_map() {
    let left = json!({"a": 1, "b": 2});
    let right = json!({"a": 9, "b": 2});
    let report = StructuralDiff::default().compare(&left, &right);

    let serialized = serde_json::to_value(&report).unwrap();
    assert_eq!(serialized, json!({"values_changed": ["root['a']"]}));
}

#[test]
fn test_empty_report_counts() {
    let doc = json!({"stable": [1, 2, 3]});
    let report = StructuralDiff::default().compare(&doc, &doc);

    assert!(report.is_empty());
    assert_eq!(report.total_entries(), 0);
    assert_eq!(report.categories().count(), 0);
}
