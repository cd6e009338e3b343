//! JSON writer for split output files.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Result, SplitterError};

/// Indentation used for every output file.
const INDENT: &[u8] = b"  ";

/// Serialize a value as human-readable JSON.
///
/// Uses a 2-space indent and keeps non-ASCII text literal, so Arabic content
/// stays readable in the output files.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    String::from_utf8(buf)
        .map_err(|e| SplitterError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write a value as a JSON file.
///
/// Uses atomic write pattern: writes to a hidden temp file next to the target,
/// syncs to disk, then renames. The parent directory is created if missing.
/// Any IO failure is reported as [`SplitterError::Write`] for `path`.
pub fn write_json_file<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = to_pretty_json(value)?;
    write_atomic(path, content.as_bytes()).map_err(|source| SplitterError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "output path has no file name")
        })?;
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    if let Err(e) = fs::rename(&temp_file, path) {
        let _ = fs::remove_file(&temp_file);
        return Err(e);
    }

    Ok(())
}
