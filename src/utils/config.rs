//! Configuration and constants for the CLI.

/// Marker for the document root in locations and diff paths
pub const ROOT_MARKER: &str = "root";

// Report layout: category headers and prefix rows are left-justified into a
// fixed column, the count follows after a pipe
pub const SUMMARY_COLUMN_WIDTH: usize = 100;

/// Group cap used by the summarizer when the caller does not pick one
/// (also the cap for diagnostics written during a failed descent)
pub const DEFAULT_SUMMARY_TOP: usize = 50;

/// Group cap used when a cursor is rendered through `Display` and by the
/// CLI success path
pub const DISPLAY_SUMMARY_TOP: usize = 10;

/// Decimal places compared before a numeric difference is reported
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 3;

// Argument validation bounds
pub const MAX_SUMMARY_TOP: usize = 1000;
pub const MAX_SIGNIFICANT_DIGITS: u32 = 17; // f64 carries no more meaningful digits
