//! Tests for the `quran-splitter` binary: exit statuses and side effects.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const BASE: &str = "https://cdn.example.com/quran";

fn azkar_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("azkar")
        .join("azkar.json")
}

fn splitter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quran-splitter"));
    cmd.env_remove("AZKAR_BASE_URL")
        .env_remove("AZKAR_INPUT_PATH")
        .env_remove("AZKAR_OUTPUT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn entries(dir: &Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

#[test]
fn test_no_arguments_prints_usage() {
    splitter()
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_mode_prints_usage_and_writes_nothing() {
    let output = tempdir().unwrap();
    splitter()
        .args(["merge", "--output"])
        .arg(output.path())
        .assert()
        .code(0);
    assert_eq!(entries(output.path()), 0);
}

#[test]
fn test_categories_mode() {
    let output = tempdir().unwrap();
    splitter()
        .arg("categories")
        .arg("--input")
        .arg(azkar_fixture())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    assert!(output.path().join("azkar-categories.json").is_file());
    assert_eq!(entries(output.path()), 1);
}

#[test]
fn test_split_mode_uses_base_url_from_env() {
    let output = tempdir().unwrap();
    splitter()
        .env("AZKAR_BASE_URL", BASE)
        .args(["split", "2", "2", "--input"])
        .arg(azkar_fixture())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    assert_eq!(entries(output.path()), 1);
    let content = fs::read_to_string(output.path().join("2.json")).unwrap();
    assert!(content.contains("https://cdn.example.com/quran/azkar-data/audio/a.mp3"));
}

#[test]
fn test_split_base_url_flag_overrides_env() {
    let output = tempdir().unwrap();
    splitter()
        .env("AZKAR_BASE_URL", BASE)
        .args(["split", "1", "1", "--base-url", "https://mirror.test/"])
        .arg("--input")
        .arg(azkar_fixture())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let content = fs::read_to_string(output.path().join("1.json")).unwrap();
    assert!(content.contains("https://mirror.test/azkar-data/audio/1.mp3"));
}

#[test]
fn test_split_non_integer_is_usage_error() {
    let output = tempdir().unwrap();
    splitter()
        .args(["split", "one", "5", "--input"])
        .arg(azkar_fixture())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(2);
    assert_eq!(entries(output.path()), 0);
}

#[test]
fn test_split_missing_bound_is_usage_error() {
    splitter().args(["split", "1"]).assert().code(2);
}

#[test]
fn test_split_reversed_range_selects_nothing() {
    let output = tempdir().unwrap();
    splitter()
        .args(["split", "5", "1", "--input"])
        .arg(azkar_fixture())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("(0 selected)"));
    assert_eq!(entries(output.path()), 0);
}

#[test]
fn test_categories_write_failure_is_partial() {
    let scratch = tempdir().unwrap();
    // A regular file where the output directory should be
    let output = scratch.path().join("not-a-dir");
    fs::write(&output, "").unwrap();

    splitter()
        .arg("categories")
        .arg("--input")
        .arg(azkar_fixture())
        .arg("--output")
        .arg(&output)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Summarizing"))
        .stderr(predicate::str::contains("categories summary not written"))
        .stderr(predicate::str::contains("Failed to write"));

    assert!(output.is_file());
}

#[test]
fn test_missing_input_is_fatal() {
    let output = tempdir().unwrap();
    splitter()
        .args(["categories", "--input"])
        .arg(output.path().join("missing.json"))
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"));
    assert_eq!(entries(output.path()), 0);
}

#[test]
fn test_malformed_input_is_fatal_in_both_modes() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let path = input.path().join("azkar.json");
    fs::write(&path, "not json").unwrap();

    for args in [vec!["categories"], vec!["split", "1", "3"]] {
        splitter()
            .args(&args)
            .arg("--input")
            .arg(&path)
            .arg("--output")
            .arg(output.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Could not decode JSON"));
    }
    assert_eq!(entries(output.path()), 0);
}

#[test]
fn test_invalid_base_url_is_fatal() {
    splitter()
        .env("AZKAR_BASE_URL", "not-a-url")
        .args(["split", "1", "1", "--input"])
        .arg(azkar_fixture())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid base URL"));
}

#[test]
fn test_split_write_failure_is_partial() {
    let output = tempdir().unwrap();
    fs::create_dir(output.path().join("1.json")).unwrap();
    fs::write(output.path().join("1.json").join("keep"), "").unwrap();

    splitter()
        .args(["split", "1", "2", "--input"])
        .arg(azkar_fixture())
        .arg("--output")
        .arg(output.path())
        .assert()
        .code(3)
        .stdout(predicate::str::contains("re-run for IDs 1"));

    assert!(output.path().join("2.json").is_file());
}

#[test]
fn test_hadith_mode() {
    let output = tempdir().unwrap();
    let source = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("hadith");

    splitter()
        .arg("hadith")
        .arg("--source-dir")
        .arg(&source)
        .arg("--output")
        .arg(output.path())
        .arg("nawawi40")
        .assert()
        .success()
        .stdout(predicate::str::contains("nawawi40: 2 chapter files"));

    assert!(output.path().join("nawawi40").join("chapters.json").is_file());
    assert!(output.path().join("nawawi40").join("2.json").is_file());
}

#[test]
fn test_hadith_missing_book_is_fatal() {
    let output = tempdir().unwrap();
    splitter()
        .args(["hadith", "--source-dir"])
        .arg(output.path())
        .arg("--output")
        .arg(output.path())
        .arg("bukhari")
        .assert()
        .code(1);
}
