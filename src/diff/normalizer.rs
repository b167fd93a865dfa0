//! Diff path normalization and segmentation.
//!
//! Collapses volatile tokens such as UUIDs and numeric CSV runs so that
//! paths differing only in generated identifiers group together, and
//! breaks bracket paths into dotted segments for prefix counting.

use regex::Regex;
use std::sync::OnceLock;

use crate::utils::config::ROOT_MARKER;

/// Replacement token for UUID literals inside diff paths
pub const UUID_PLACEHOLDER: &str = "<UUID>";

/// Replacement token for comma-separated numeric runs inside diff paths
pub const CSV_PLACEHOLDER: &str = "<CSV>";

fn uuid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}",
        )
        .unwrap()
    })
}

fn csv_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9.]*(,[0-9.]+)+").unwrap())
}

/// Replace volatile tokens in a diff path with stable placeholders
///
/// UUIDs are collapsed first so their hyphenated digit runs cannot be
/// picked up as CSV material afterwards.
///
/// # Arguments
/// * `path` - Bracket path as recorded by the diff engine
///
/// # Returns
/// The path with every UUID replaced by `<UUID>` and every numeric CSV
/// run replaced by `<CSV>`
pub fn normalize_path(path: &str) -> String {
    let pass = uuid_re().replace_all(path, UUID_PLACEHOLDER);
    csv_re().replace_all(&pass, CSV_PLACEHOLDER).into_owned()
}

/// Split a bracket path into its segment sequence
///
/// Closing quote-brackets are dropped, a dotted `root.` lead-in is
/// stripped, and the remainder splits on the opening quote-bracket pair.
/// The root marker stays as the first segment and numeric indices stay
/// glued to the key they follow, so `root['users'][0]['id']` becomes
/// `["root", "users[0]", "id"]`.
///
/// # Arguments
/// * `path` - Normalized bracket path
///
/// # Returns
/// Segment names in root-to-leaf order
pub fn split_segments(path: &str) -> Vec<String> {
    let stripped = path.replace("']", "");
    let trimmed = stripped
        .strip_prefix(&format!("{ROOT_MARKER}."))
        .unwrap_or(&stripped);
    trimmed.split("['").map(str::to_string).collect()
}

// ============================================================
// Tests
// ============================================================
