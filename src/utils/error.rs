//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while navigating a pair of documents
#[derive(Error, Debug)]
pub enum NavigationError {
    /// The requested key or index is absent from at least one side.
    ///
    /// `location` is the dotted location of the cursor before the failed
    /// step; the diagnostic summary for that location has already been
    /// written when this error is returned.
    #[error("{location} | key missing: {key}")]
    PathNotFound { location: String, key: String },

    #[error("failed to write diagnostic summary: {0}")]
    Diagnostic(#[from] std::io::Error),
}

/// Errors that can occur while parsing a dot/bracket path expression
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PathParseError {
    #[error("empty path expression")]
    EmptyExpression,

    #[error("empty segment at position {0} in path expression")]
    EmptySegment(usize),

    #[error("invalid index syntax in segment '{0}'")]
    InvalidIndex(String),

    #[error("segment '{0}' must name a key before an index")]
    MissingIndexKey(String),
}

/// Errors that can occur while loading a JSON document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
