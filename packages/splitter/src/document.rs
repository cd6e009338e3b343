//! Loading of input documents.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, SplitterError};
use crate::types::CategoryRecord;

/// Load the azkar document: a top-level array of categories.
///
/// No validation is performed beyond JSON parsing and the lenient record
/// shape; missing fields read as absent.
///
/// # Errors
/// * [`SplitterError::NotFound`] if `path` does not exist
/// * [`SplitterError::Parse`] if the content is not valid JSON or its top level
///   is not an array
pub fn load_document(path: &Path) -> Result<Vec<CategoryRecord>> {
    let categories: Vec<CategoryRecord> = load_json(path)?;
    debug!(path = %path.display(), categories = categories.len(), "loaded azkar document");
    Ok(categories)
}

/// Read and parse any JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SplitterError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SplitterError::Io(e),
    })?;

    serde_json::from_str(&content).map_err(|source| SplitterError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
