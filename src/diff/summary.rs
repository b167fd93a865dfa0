//! Diff report grouping and rendering.
//!
//! Turns the flat per-category path lists of a report into ranked prefix
//! groups and writes the fixed-width textual summary.

use indexmap::IndexMap;
use std::io::{self, Write};

use super::normalizer::{normalize_path, split_segments};
use super::schema::{CategorySummary, DiffReport, PrefixCount};
use crate::utils::config::SUMMARY_COLUMN_WIDTH;

/// Group a report's paths by structural prefix and rank them per category
///
/// Each path is normalized, split into segments, and every strict prefix
/// of the segment sequence (never the empty prefix, never the full path)
/// increments a counter. Counters sort ascending by count; the final `top`
/// entries survive, so the heaviest prefixes always appear and appear
/// last. Ties keep the order in which the walk first produced them.
///
/// # Arguments
/// * `report` - Raw diff output, one path list per category
/// * `top` - Maximum number of prefix groups retained per category
///
/// # Returns
/// One CategorySummary per category, in the report's category order. The
/// `total` field always sums every prefix counter, including those the
/// cap removed.
pub fn summarize_report(report: &DiffReport, top: usize) -> Vec<CategorySummary> {
    report
        .categories()
        .map(|(category, paths)| {
            let mut counters: IndexMap<String, u64> = IndexMap::new();
            for path in paths {
                let normalized = normalize_path(path);
                let segments = split_segments(&normalized);
                for depth in 1..segments.len() {
                    *counters.entry(segments[..depth].join(".")).or_insert(0) += 1;
                }
            }

            let total = counters.values().sum();
            let mut groups: Vec<PrefixCount> = counters
                .into_iter()
                .map(|(prefix, count)| PrefixCount { prefix, count })
                .collect();
            groups.sort_by_key(|group| group.count);
            let groups = groups.split_off(groups.len().saturating_sub(top));

            CategorySummary {
                category: category.to_string(),
                total,
                groups,
            }
        })
        .collect()
}

/// Render the ranked summary of a report as fixed-width text
///
/// Layout: a title line naming the location, then per category a header
/// with the uppercased category name and the category's total count,
/// followed by one row per retained prefix group (rarest first) and a
/// blank separator. Names and prefixes are left-justified into a fixed
/// column, the count follows after a pipe.
///
/// # Arguments
/// * `report` - Raw diff output to summarize
/// * `location` - Dotted location heading the report
/// * `top` - Maximum number of prefix groups rendered per category
/// * `sink` - Destination for the rendered text
///
/// # Errors
/// Returns any error raised by writing to the sink
pub fn render_summary(
    report: &DiffReport,
    location: &str,
    top: usize,
    sink: &mut dyn Write,
) -> io::Result<()> {
    write!(sink, "{location} diffing data\n\n")?;

    for category in summarize_report(report, top) {
        writeln!(
            sink,
            "{:<width$}|{}",
            category.category.to_uppercase(),
            category.total,
            width = SUMMARY_COLUMN_WIDTH
        )?;
        for group in &category.groups {
            writeln!(
                sink,
                "{:<width$}|{}",
                group.prefix,
                group.count,
                width = SUMMARY_COLUMN_WIDTH
            )?;
        }
        write!(sink, "\n\n")?;
    }

    Ok(())
}

// ============================================================
// Tests
// ============================================================
