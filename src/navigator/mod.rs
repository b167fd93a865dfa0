//! Path-aware navigation over pairs of parsed documents.

mod cursor;

// Public API exports
pub use cursor::{PathCursor, PathSegment};
