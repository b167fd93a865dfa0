//! Command implementations for the CLI.

pub mod inspect;

// Re-export command entry points
pub use inspect::{execute_inspect, inspect_documents, validate_args, InspectArgs};
