//! Rewriting of relative audio paths into absolute URLs.

use tracing::debug;

use crate::config::AUDIO_URL_SEGMENT;
use crate::types::DhikrRecord;

/// Build the absolute URL for a relative audio path.
///
/// Leading slashes are stripped and the result is
/// `{base_url}/azkar-data/{path}`. This is a pure string operation; an
/// already absolute URL is not detected and gets prefixed again.
///
/// # Examples
/// ```
/// use quran_splitter::audio::rewrite_audio_path;
///
/// assert_eq!(
///     rewrite_audio_path("/audio/1.mp3", "https://cdn.test"),
///     "https://cdn.test/azkar-data/audio/1.mp3"
/// );
/// ```
#[must_use]
pub fn rewrite_audio_path(relative_path: &str, base_url: &str) -> String {
    let clean_path = relative_path.trim_start_matches('/');
    format!("{base_url}/{AUDIO_URL_SEGMENT}/{clean_path}")
}

/// Rewrite the `audio` field of a record in place.
///
/// Absent, empty or non-string values are left untouched. Returns whether the
/// record was changed.
pub fn rewrite_dhikr_audio(dhikr: &mut DhikrRecord, base_url: &str) -> bool {
    let Some(path) = dhikr.audio().filter(|p| !p.is_empty()) else {
        if dhikr.get(DhikrRecord::AUDIO_KEY).is_some() {
            debug!("leaving empty or non-string audio field untouched");
        }
        return false;
    };

    let url = rewrite_audio_path(path, base_url);
    dhikr.set_audio(url);
    true
}
