//! diffnav
//!
//! Path-aware structural diff navigation for JSON documents.
//!
//! Compares two JSON trees position-for-position, lets callers walk into
//! a sub-path with lock-step cursors, and summarizes the differences at
//! that location as ranked prefix groups with volatile tokens (UUIDs,
//! numeric CSV runs) collapsed.
//!
//! This crate provides the core implementation for the `diffnav` CLI
//! tool; the same modules are exposed as a library so the navigation and
//! summarizing stages can be driven programmatically.

pub mod commands;
pub mod diff;
pub mod navigator;
pub mod parser;
pub mod utils;
