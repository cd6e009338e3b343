//! Configuration constants and validation functions for the splitter.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::{Result, SplitterError};

/// Default base URL under which rewritten audio paths are hosted.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/ahanafy41/The-Holy-Quran/data";

/// Default path of the monolithic azkar document.
pub const DEFAULT_INPUT_PATH: &str = "azkar-data/azkar.json";

/// Default directory that receives the split azkar files.
pub const DEFAULT_OUTPUT_DIR: &str = "azkar-data";

/// Filename of the category summary written in `categories` mode.
pub const CATEGORIES_FILENAME: &str = "azkar-categories.json";

/// Path segment between the base URL and the relative audio path.
pub const AUDIO_URL_SEGMENT: &str = "azkar-data";

/// Environment variable overriding the audio base URL.
pub const ENV_BASE_URL: &str = "AZKAR_BASE_URL";

/// Environment variable overriding the input document path.
pub const ENV_INPUT_PATH: &str = "AZKAR_INPUT_PATH";

/// Environment variable overriding the output directory.
pub const ENV_OUTPUT_DIR: &str = "AZKAR_OUTPUT_DIR";

/// Default directory holding one JSON document per hadith book.
pub const DEFAULT_HADITH_SOURCE_DIR: &str = "data";

/// Default directory that receives the per-book hadith folders.
pub const DEFAULT_HADITH_OUTPUT_DIR: &str = "public/hadith-data";

/// Hadith books processed when none are named explicitly.
///
/// Each entry matches a `{book}.json` file in the hadith source directory.
pub const DEFAULT_HADITH_BOOKS: &[&str] = &[
    "bukhari",
    "muslim",
    "nasai",
    "abudawud",
    "tirmidhi",
    "ibnmajah",
    "malik",
    "ahmed",
    "darimi",
    "riyad_assalihin",
    "shamail_muhammadiyah",
    "aladab_almufrad",
    "bulugh_almaram",
    "nawawi40",
    "qudsi40",
    "shahwaliullah40",
    "mishkat_almasabih",
];

/// Absolute http(s) URL with a host.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BASE_URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s]+(/\S*)?$").expect("valid regex"));

/// Book identifiers double as filenames, so keep them to a safe alphabet.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOOK_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("valid regex"));

/// Validate a base URL and return it without trailing slashes.
///
/// # Examples
/// ```
/// use quran_splitter::config::validate_base_url;
///
/// assert_eq!(
///     validate_base_url("https://example.com/data/").unwrap(),
///     "https://example.com/data"
/// );
/// assert!(validate_base_url("example.com").is_err());
/// ```
pub fn validate_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim();
    if !BASE_URL_PATTERN.is_match(trimmed) {
        return Err(SplitterError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Validate a hadith book identifier.
pub fn validate_book_id(book_id: &str) -> Result<()> {
    if BOOK_ID_PATTERN.is_match(book_id) {
        Ok(())
    } else {
        Err(SplitterError::Config(format!(
            "Invalid book id '{book_id}'. Expected lowercase letters, digits and underscores"
        )))
    }
}

/// Runtime configuration for the azkar splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub base_url: String,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.into(),
            output_dir: DEFAULT_OUTPUT_DIR.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SplitterConfig {
    /// Build a configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults; the base URL is validated.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let input_path = lookup(ENV_INPUT_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.input_path);

        let output_dir = lookup(ENV_OUTPUT_DIR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let base_url = lookup(ENV_BASE_URL)
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);

        Ok(Self {
            input_path,
            output_dir,
            base_url: validate_base_url(&base_url)?,
        })
    }

    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Override the base URL, validating it.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        self.base_url = validate_base_url(base_url)?;
        Ok(self)
    }
}
