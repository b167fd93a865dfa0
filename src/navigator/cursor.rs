//! Lock-step navigation into a pair of JSON documents.
//!
//! A cursor holds matching positions in two trees and only moves when the
//! requested step exists on both sides, so any divergence surfaces at the
//! exact location it appears.

use log::debug;
use serde_json::Value;
use std::fmt;
use std::io::{self, Write};

use crate::diff::{render_summary, DiffEngine, DiffReport, StructuralDiff};
use crate::utils::config::{DEFAULT_SUMMARY_TOP, DISPLAY_SUMMARY_TOP, ROOT_MARKER};
use crate::utils::error::NavigationError;

/// One step of a parsed path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// The document root marker
    Root,

    /// Object key lookup
    Key(String),

    /// Array index lookup
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Root => f.write_str(ROOT_MARKER),
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Matching positions in two documents, reached by the same lookups
///
/// Each descent produces a fresh cursor with its own copy of the location
/// trail, so sibling descents from the same cursor never observe each
/// other's extensions. Rendering a cursor through `Display` prints the
/// diff summary at its current location capped to the ten heaviest groups
/// per category.
#[derive(Debug, Clone)]
pub struct PathCursor<'a, D = StructuralDiff> {
    left: &'a Value,
    right: &'a Value,
    location: Vec<PathSegment>,
    engine: D,
    ignore_added: bool,
}

impl<'a> PathCursor<'a> {
    /// Create a cursor over two document roots with the default engine
    ///
    /// Additions present only on the right side are ignored until
    /// [`with_ignore_added`](Self::with_ignore_added) says otherwise.
    pub fn new(left: &'a Value, right: &'a Value) -> Self {
        Self::with_engine(left, right, StructuralDiff::default())
    }
}

impl<'a, D: DiffEngine + Clone> PathCursor<'a, D> {
    /// Create a cursor over two document roots with an explicit engine
    pub fn with_engine(left: &'a Value, right: &'a Value, engine: D) -> Self {
        Self {
            left,
            right,
            location: vec![PathSegment::Root],
            engine,
            ignore_added: true,
        }
    }

    /// Choose whether right-side-only additions are dropped from summaries
    pub fn with_ignore_added(mut self, ignore_added: bool) -> Self {
        self.ignore_added = ignore_added;
        self
    }

    /// Step into a child present on both sides
    ///
    /// # Arguments
    /// * `segment` - Key or index to look up in both documents
    /// * `diagnostics` - Sink receiving the diff summary when the step fails
    ///
    /// # Returns
    /// A new cursor scoped one level deeper, its location extended by the
    /// segment
    ///
    /// # Errors
    /// * `NavigationError::PathNotFound` - The segment is absent from at
    ///   least one side. Before the error is returned, the diff summary of
    ///   the current position is written to `diagnostics` so the caller
    ///   sees what diverges at the point of failure.
    /// * `NavigationError::Diagnostic` - Writing that summary failed
    pub fn descend(
        &self,
        segment: &PathSegment,
        diagnostics: &mut dyn Write,
    ) -> Result<PathCursor<'a, D>, NavigationError> {
        let children = match segment {
            PathSegment::Key(key) => (self.left.get(key.as_str()), self.right.get(key.as_str())),
            PathSegment::Index(index) => (self.left.get(*index), self.right.get(*index)),
            PathSegment::Root => (None, None),
        };

        match children {
            (Some(left_child), Some(right_child)) => {
                let mut location = self.location.clone();
                location.push(segment.clone());
                Ok(PathCursor {
                    left: left_child,
                    right: right_child,
                    location,
                    engine: self.engine.clone(),
                    ignore_added: self.ignore_added,
                })
            }
            _ => {
                debug!("descent into '{segment}' failed at {}", self.location());
                self.write_summary(DEFAULT_SUMMARY_TOP, diagnostics)?;
                Err(NavigationError::PathNotFound {
                    location: self.location(),
                    key: segment.to_string(),
                })
            }
        }
    }

    /// Compute the structural diff between the two current positions
    ///
    /// Applies the cursor's added-category filter before returning.
    pub fn raw_diff(&self) -> DiffReport {
        let mut report = self.engine.compare(self.left, self.right);
        if self.ignore_added {
            report.drop_added_categories();
        }
        report
    }

    /// Write the ranked diff summary for the current position
    ///
    /// # Arguments
    /// * `top` - Maximum number of prefix groups per category
    /// * `sink` - Destination for the rendered report
    pub fn write_summary(&self, top: usize, sink: &mut dyn Write) -> io::Result<()> {
        let report = self.raw_diff();
        debug!(
            "summarizing {} diff entries at {}",
            report.total_entries(),
            self.location()
        );
        render_summary(&report, &self.location(), top, sink)
    }

    /// Dotted rendering of the location trail, starting at the root marker
    pub fn location(&self) -> String {
        self.location
            .iter()
            .map(PathSegment::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Current position in the left document
    pub fn left(&self) -> &'a Value {
        self.left
    }

    /// Current position in the right document
    pub fn right(&self) -> &'a Value {
        self.right
    }
}

impl<D: DiffEngine + Clone> fmt::Display for PathCursor<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Vec::new();
        self.write_summary(DISPLAY_SUMMARY_TOP, &mut buffer)
            .map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buffer))
    }
}

// ============================================================
// Tests
// ============================================================
