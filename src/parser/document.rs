//! JSON document loading.

use log::debug;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

use crate::utils::error::DocumentError;

/// Load a JSON document from disk
///
/// Object keys keep their document order, so two loads of the same file
/// always diff and summarize identically.
///
/// # Arguments
/// * `path` - Path to a UTF-8 JSON file
///
/// # Returns
/// The parsed document tree
///
/// # Errors
/// * `DocumentError::Io` - The file cannot be opened or read
/// * `DocumentError::Json` - The contents are not valid JSON
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, DocumentError> {
    let path = path.as_ref();

    debug!("Loading document from: {}", path.display());

    let file = File::open(path)?;
    let document = serde_json::from_reader(file)?;
    Ok(document)
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"a": {{"b": [1, 2]}}}}"#).unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document["a"]["b"][1], 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = load_document("/nonexistent/file.json").unwrap_err();
        assert!(matches!(error, DocumentError::Io(_)));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let error = load_document(file.path()).unwrap_err();
        assert!(matches!(error, DocumentError::Json(_)));
    }
}
