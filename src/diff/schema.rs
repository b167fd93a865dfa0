//! Schema definitions for structural diff reports.
//!
//! Defines the structures that represent differences between two documents.

use indexmap::IndexMap;
use serde::Serialize;

/// Changed values that share a JSON type on both sides
pub const VALUES_CHANGED: &str = "values_changed";

/// Values whose JSON type differs between the two sides
pub const TYPE_CHANGES: &str = "type_changes";

/// Object keys present only in the right document
pub const DICTIONARY_ITEM_ADDED: &str = "dictionary_item_added";

/// Object keys present only in the left document
pub const DICTIONARY_ITEM_REMOVED: &str = "dictionary_item_removed";

/// Array elements present only in the right document
pub const ITERABLE_ITEM_ADDED: &str = "iterable_item_added";

/// Array elements present only in the left document
pub const ITERABLE_ITEM_REMOVED: &str = "iterable_item_removed";

/// Complete structural diff between two documents, grouped by change category
///
/// Categories and the paths inside them keep the order in which the
/// comparison walk discovered them, so reports are deterministic for a
/// given pair of documents.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct DiffReport {
    /// Map from category name to the bracket paths recorded under it
    pub categories: IndexMap<String, Vec<String>>,
}

impl DiffReport {
    /// Record a single changed path under a category
    ///
    /// # Arguments
    /// * `category` - One of the category name constants in this module
    /// * `path` - Bracket path of the change, e.g. `root['users'][0]['id']`
    pub fn record(&mut self, category: &str, path: String) {
        self.categories.entry(category.to_string()).or_default().push(path);
    }

    /// Drop every category whose name marks an addition
    ///
    /// Used when the caller only cares about values that existed on the
    /// left side, so new keys and new array elements are noise.
    pub fn drop_added_categories(&mut self) {
        self.categories.retain(|name, _| !name.contains("added"));
    }

    /// Iterate categories with their recorded paths, in discovery order
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories.iter().map(|(name, paths)| (name.as_str(), paths.as_slice()))
    }

    /// True when no differences were recorded at all
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|paths| paths.is_empty())
    }

    /// Total number of recorded paths across all categories
    pub fn total_entries(&self) -> usize {
        self.categories.values().map(|paths| paths.len()).sum()
    }
}

/// Ranked prefix groups for one diff category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Category name, e.g. `values_changed`
    pub category: String,

    /// Sum of the counts of every prefix group, including those the rank
    /// cap cut off
    pub total: u64,

    /// Retained groups, rarest first
    pub groups: Vec<PrefixCount>,
}

/// A dotted path prefix and how many diff entries fall under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixCount {
    /// Dot-joined prefix, e.g. `root.users[0]`
    pub prefix: String,

    /// Number of diff entries sharing this prefix
    pub count: u64,
}
