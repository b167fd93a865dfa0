//! Input parsing for documents and path expressions.
//!
//! This module handles:
//! - Loading JSON documents from disk
//! - Parsing dot/bracket path expressions into navigation segments

pub mod document;
pub mod path_expr;

// Re-export main entry points
pub use document::load_document;
pub use path_expr::parse_path;
