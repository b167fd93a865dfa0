//! Structural diff computation, normalization, and summary rendering.
//!
//! This module compares two JSON documents position-for-position and turns
//! the resulting per-category path lists into ranked prefix-group reports.
//!
//! # Example
//! ```ignore
//! use diffnav::diff::{render_summary, DiffEngine, StructuralDiff};
//! use serde_json::json;
//!
//! let engine = StructuralDiff::default();
//! let report = engine.compare(&json!({"a": 1}), &json!({"a": 2}));
//!
//! let mut out = Vec::new();
//! render_summary(&report, "root", 10, &mut out)?;
//! ```

mod engine;
mod normalizer;
mod schema;
mod summary;

// Public API exports
pub use engine::{DiffEngine, DiffTolerance, StructuralDiff};
pub use normalizer::{normalize_path, split_segments, CSV_PLACEHOLDER, UUID_PLACEHOLDER};
pub use schema::{
    CategorySummary, DiffReport, PrefixCount, DICTIONARY_ITEM_ADDED, DICTIONARY_ITEM_REMOVED,
    ITERABLE_ITEM_ADDED, ITERABLE_ITEM_REMOVED, TYPE_CHANGES, VALUES_CHANGED,
};
pub use summary::{render_summary, summarize_report};
