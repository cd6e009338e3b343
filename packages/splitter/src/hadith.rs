//! Splitting of hadith collections into per-chapter files.
//!
//! Each book `{source_dir}/{book}.json` becomes a directory
//! `{output_dir}/{book}/` holding `chapters.json` and one `{chapterId}.json`
//! per chapter. Unlike the azkar splitter, any failure aborts the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::config::validate_book_id;
use crate::document::load_json;
use crate::error::Result;
use crate::json::write_json_file;
use crate::types::HadithBook;

/// Filename of the chapter listing inside each book directory.
pub const CHAPTERS_FILENAME: &str = "chapters.json";

/// Result of processing one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReport {
    pub book_id: String,
    pub output_dir: PathBuf,
    pub chapter_files: usize,
    /// Hadiths dropped for lacking a usable `chapterId`.
    pub skipped_hadiths: usize,
}

/// Group hadiths by chapter, keeping input order inside each group.
#[must_use]
pub fn group_by_chapter(hadiths: &[Value]) -> (BTreeMap<String, Vec<&Value>>, usize) {
    let mut groups: BTreeMap<String, Vec<&Value>> = BTreeMap::new();
    let mut skipped = 0;

    for hadith in hadiths {
        match HadithBook::chapter_key(hadith) {
            Some(key) => groups.entry(key).or_default().push(hadith),
            None => skipped += 1,
        }
    }

    (groups, skipped)
}

/// Split one hadith book.
pub fn process_hadith_book(source_dir: &Path, output_dir: &Path, book_id: &str) -> Result<BookReport> {
    validate_book_id(book_id)?;

    let input_file = source_dir.join(format!("{book_id}.json"));
    let book_output_dir = output_dir.join(book_id);
    info!(book = book_id, "processing hadith book");

    let book: HadithBook = load_json(&input_file)?;

    write_json_file(
        &book_output_dir.join(CHAPTERS_FILENAME),
        &book.chapters_listing(),
    )?;

    let (groups, skipped_hadiths) = group_by_chapter(&book.hadiths);
    if skipped_hadiths > 0 {
        warn!(book = book_id, skipped = skipped_hadiths, "hadiths without chapterId skipped");
    }

    for (chapter_id, hadiths) in &groups {
        write_json_file(&book_output_dir.join(format!("{chapter_id}.json")), hadiths)?;
    }
    info!(book = book_id, chapters = groups.len(), "wrote chapter files");

    Ok(BookReport {
        book_id: book_id.to_string(),
        output_dir: book_output_dir,
        chapter_files: groups.len(),
        skipped_hadiths,
    })
}

/// Split several books in order, stopping at the first failure.
pub fn process_hadith_books<S: AsRef<str>>(
    source_dir: &Path,
    output_dir: &Path,
    books: &[S],
) -> Result<Vec<BookReport>> {
    books
        .iter()
        .map(|book| process_hadith_book(source_dir, output_dir, book.as_ref()))
        .collect()
}
