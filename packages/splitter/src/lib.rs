//! Quran data splitter - reshape monolithic JSON data into per-category files.
//!
//! This crate splits the azkar (supplications) document into a category
//! summary plus one file per category, rewriting relative audio paths into
//! absolute URLs, and splits hadith collections into per-chapter files.
//!
//! # Example
//!
//! ```
//! use quran_splitter::audio::rewrite_audio_path;
//! use quran_splitter::config;
//!
//! let base = config::validate_base_url("https://cdn.example.com/").unwrap();
//! assert_eq!(
//!     rewrite_audio_path("/audio/1.mp3", &base),
//!     "https://cdn.example.com/azkar-data/audio/1.mp3"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants, environment config and validation
//! - [`types`]: Lenient record types for azkar and hadith documents
//! - [`error`]: Error types and Result alias
//! - [`document`]: Input document loading
//! - [`audio`]: Audio path rewriting
//! - [`summary`]: Category summary generation
//! - [`split`]: Per-category file splitting
//! - [`hadith`]: Per-chapter hadith splitting
//! - [`json`]: JSON output formatting and atomic writes
//! - [`cli`]: Command-line interface

pub mod audio;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod hadith;
pub mod json;
pub mod split;
pub mod summary;
pub mod types;

// Re-export main operations
pub use audio::rewrite_audio_path;
pub use document::load_document;
pub use hadith::{process_hadith_book, process_hadith_books};
pub use split::{split_categories_in_range, SplitReport};
pub use summary::{build_category_summary, write_category_summary};

// Re-export commonly used items
pub use config::SplitterConfig;
pub use error::{Result, SplitterError};
pub use types::{CategoryRecord, CategorySummaryEntry, DhikrRecord};
