//! Category summary generation.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::json::write_json_file;
use crate::types::{CategoryRecord, CategorySummaryEntry};

/// Project every category to its `{id, category}` pair, in input order.
///
/// Never filters, sorts or deduplicates; missing fields stay absent.
#[must_use]
pub fn build_category_summary(categories: &[CategoryRecord]) -> Vec<CategorySummaryEntry> {
    categories.iter().map(CategorySummaryEntry::from).collect()
}

/// Write the summary entries to `output_dir/filename`.
///
/// Returns the path written. A failure is reported as
/// [`SplitterError::Write`](crate::SplitterError::Write), which callers treat
/// as non-fatal.
pub fn write_category_summary(
    entries: &[CategorySummaryEntry],
    output_dir: &Path,
    filename: &str,
) -> Result<PathBuf> {
    let path = output_dir.join(filename);
    write_json_file(&path, entries)?;
    info!(path = %path.display(), entries = entries.len(), "wrote categories summary");
    Ok(path)
}
