//! Error types for the splitter.
//!
//! `SplitterError` covers both fatal failures (missing or malformed input,
//! bad configuration) and the per-file write failures that the split
//! pipelines report without aborting.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Input document does not exist.
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Input document is not valid JSON, or not the expected shape.
    #[error("Could not decode JSON from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A single output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base URL: '{0}'. Expected an absolute http(s) URL")]
    InvalidBaseUrl(String),

    /// Other configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SplitterError {
    /// Whether this error stops a run before any output is produced.
    ///
    /// Write failures are reported per file and never stop a run.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Write { .. })
    }
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
