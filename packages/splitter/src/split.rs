//! Splitting of azkar categories into per-category files.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::audio::rewrite_dhikr_audio;
use crate::error::SplitterError;
use crate::json::write_json_file;
use crate::types::CategoryRecord;

/// Outcome of one category selected for splitting.
#[derive(Debug)]
pub enum FileOutcome {
    Written { id: i64, path: PathBuf },
    Failed { id: i64, error: SplitterError },
}

/// Result of a split run.
///
/// Write failures are collected here instead of aborting the run.
#[derive(Debug, Default)]
pub struct SplitReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(i64, SplitterError)>,
    /// Audio fields rewritten across all written categories.
    pub audio_rewritten: usize,
}

impl SplitReport {
    /// Number of category files written.
    #[must_use]
    pub fn files_written(&self) -> usize {
        self.written.len()
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Whether a category is selected by the inclusive range.
///
/// Categories without an identifier, or with identifier `0`, never are.
#[must_use]
pub fn in_range(category: &CategoryRecord, start_id: i64, end_id: i64) -> bool {
    category
        .split_id()
        .is_some_and(|id| (start_id..=end_id).contains(&id))
}

/// Write `output_dir/{id}.json` for every category in `[start_id, end_id]`.
///
/// Each file holds the category's dhikr list with audio paths rewritten
/// against `base_url`. The input is not modified.
pub fn split_categories_in_range(
    categories: &[CategoryRecord],
    start_id: i64,
    end_id: i64,
    output_dir: &Path,
    base_url: &str,
) -> SplitReport {
    split_categories_with_progress(categories, start_id, end_id, output_dir, base_url, |_| {})
}

/// Like [`split_categories_in_range`], reporting each file as it is handled.
pub fn split_categories_with_progress<F>(
    categories: &[CategoryRecord],
    start_id: i64,
    end_id: i64,
    output_dir: &Path,
    base_url: &str,
    mut on_file: F,
) -> SplitReport
where
    F: FnMut(&FileOutcome),
{
    info!(start_id, end_id, "processing categories");
    let mut report = SplitReport::default();

    for category in categories {
        let Some(id) = category.split_id().filter(|_| in_range(category, start_id, end_id))
        else {
            continue;
        };

        let mut dhikr_array = category.array.clone();
        let rewritten = dhikr_array
            .iter_mut()
            .map(|dhikr| rewrite_dhikr_audio(dhikr, base_url))
            .filter(|changed| *changed)
            .count();
        debug!(id, rewritten, "rewrote audio paths");

        let path = output_dir.join(format!("{id}.json"));
        let outcome = match write_json_file(&path, &dhikr_array) {
            Ok(()) => {
                info!(path = %path.display(), "created category file");
                report.audio_rewritten += rewritten;
                FileOutcome::Written { id, path }
            }
            Err(e) => {
                error!(id, error = %e, "failed to write category file");
                FileOutcome::Failed { id, error: e }
            }
        };

        on_file(&outcome);
        match outcome {
            FileOutcome::Written { path, .. } => report.written.push(path),
            FileOutcome::Failed { id, error } => report.failed.push((id, error)),
        }
    }

    report
}

/// Number of categories a split over the range would write.
#[must_use]
pub fn count_in_range(categories: &[CategoryRecord], start_id: i64, end_id: i64) -> usize {
    categories
        .iter()
        .filter(|c| in_range(c, start_id, end_id))
        .count()
}
