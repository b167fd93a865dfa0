//! Inspect command implementation.
//!
//! The inspect command:
//! 1. Loads both JSON documents
//! 2. Parses the path expression
//! 3. Descends into both documents in lock-step
//! 4. Prints the ranked diff summary at the final location
//!
//! When a descent step fails, the diagnostic summary written during that
//! step is the only output and the command still finishes cleanly.

use crate::diff::{DiffTolerance, StructuralDiff};
use crate::navigator::PathCursor;
use crate::parser::{load_document, parse_path};
use crate::utils::config::{
    DEFAULT_SIGNIFICANT_DIGITS, DISPLAY_SUMMARY_TOP, MAX_SIGNIFICANT_DIGITS, MAX_SUMMARY_TOP,
};
use crate::utils::error::NavigationError;
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the inspect command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// First JSON document (left side)
    pub left: PathBuf,

    /// Second JSON document (right side)
    pub right: PathBuf,

    /// Dot/bracket path expression navigated before summarizing
    pub path: String,

    /// Maximum prefix groups shown per category
    pub top: usize,

    /// Keep categories recording right-side-only additions
    pub keep_added: bool,

    /// Decimal places compared before a numeric difference counts
    /// (None compares exactly)
    pub significant_digits: Option<u32>,

    /// Report integer vs float as a type change
    pub numeric_type_changes: bool,

    /// Print the raw diff as JSON instead of the ranked summary
    pub raw: bool,
}

impl Default for InspectArgs {
    fn default() -> Self {
        Self {
            left: PathBuf::from("left.json"),
            right: PathBuf::from("right.json"),
            path: String::new(),
            top: DISPLAY_SUMMARY_TOP,
            keep_added: false,
            significant_digits: Some(DEFAULT_SIGNIFICANT_DIGITS),
            numeric_type_changes: false,
            raw: false,
        }
    }
}

/// Execute the inspect command against standard output
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Inspect command arguments
///
/// # Returns
/// Ok when the summary was printed, or when navigation stopped after
/// writing its diagnostic
///
/// # Errors
/// * Document load failures
/// * Path expression parse failures
/// * Write failures on standard output
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let stdout = std::io::stdout();
    let mut sink = stdout.lock();
    inspect_documents(&args, &mut sink)
}

/// Run the inspect pipeline against an arbitrary sink
///
/// **Public** - split out from [`execute_inspect`] so tests can capture
/// the report
///
/// A failed descent is not an error here: the cursor has already written
/// its diagnostic summary to `sink`, which is the behavior the command
/// promises, so the pipeline ends quietly.
pub fn inspect_documents(args: &InspectArgs, sink: &mut dyn Write) -> Result<()> {
    info!(
        "Inspecting {} vs {} at '{}'",
        args.left.display(),
        args.right.display(),
        args.path
    );

    // Step 1: Load both documents
    let left = load_document(&args.left)
        .with_context(|| format!("Failed to load {}", args.left.display()))?;
    let right = load_document(&args.right)
        .with_context(|| format!("Failed to load {}", args.right.display()))?;

    // Step 2: Parse the path expression
    let segments = parse_path(&args.path)
        .with_context(|| format!("Failed to parse path expression '{}'", args.path))?;

    debug!("Parsed {} path segments", segments.len());

    // Step 3: Walk both documents in lock-step
    let tolerance = DiffTolerance {
        ignore_numeric_type_changes: !args.numeric_type_changes,
        significant_digits: args.significant_digits,
    };
    let mut cursor = PathCursor::with_engine(&left, &right, StructuralDiff::new(tolerance))
        .with_ignore_added(!args.keep_added);

    for segment in &segments {
        cursor = match cursor.descend(segment, sink) {
            Ok(next) => next,
            Err(NavigationError::PathNotFound { location, key }) => {
                // The diagnostic summary is already on the sink
                debug!("Navigation stopped at {location}: key '{key}' missing");
                return Ok(());
            }
            Err(error) => return Err(error.into()),
        };
    }

    // Step 4: Report at the final location
    if args.raw {
        let report = cursor.raw_diff();
        serde_json::to_writer_pretty(&mut *sink, &report)
            .context("Failed to serialize raw diff")?;
        writeln!(sink)?;
    } else {
        cursor.write_summary(args.top, sink)?;
    }

    Ok(())
}

/// Validate inspect arguments
///
/// **Public** - can be called before execute_inspect for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &InspectArgs) -> Result<()> {
    if args.path.is_empty() {
        anyhow::bail!("Path expression cannot be empty");
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > MAX_SUMMARY_TOP {
        anyhow::bail!("top is too large (max {MAX_SUMMARY_TOP})");
    }

    if let Some(digits) = args.significant_digits {
        if digits > MAX_SIGNIFICANT_DIGITS {
            anyhow::bail!("significant-digits is too large (max {MAX_SIGNIFICANT_DIGITS})");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> InspectArgs {
        InspectArgs {
            path: "a.b".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_args_valid() {
        assert!(validate_args(&valid_args()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_path() {
        let args = InspectArgs {
            path: String::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_zero() {
        let args = InspectArgs {
            top: 0,
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_top_too_large() {
        let args = InspectArgs {
            top: 2000,
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_digits_too_large() {
        let args = InspectArgs {
            significant_digits: Some(18),
            ..valid_args()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_exact_mode_allowed() {
        let args = InspectArgs {
            significant_digits: None,
            ..valid_args()
        };

        assert!(validate_args(&args).is_ok());
    }
}
