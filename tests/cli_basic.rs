//! Integration tests for basic CLI behavior.
//!
//! Tests that the binary exists, accepts standard flags, and each subcommand
//! responds to `--help` with appropriate text.

#![allow(deprecated)] // cargo_bin deprecation, replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: get a Command for the `glyphgrid` binary.
fn glyphgrid() -> Command {
    Command::cargo_bin("glyphgrid").expect("binary 'glyphgrid' should be built")
}

// ─── Top-level flags ─────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_usage() {
    glyphgrid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: glyphgrid"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_flag_shows_semver() {
    glyphgrid()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^glyphgrid \d+\.\d+\.\d+\n$").unwrap());
}

#[test]
fn no_args_shows_error_and_usage() {
    glyphgrid()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: glyphgrid"));
}

#[test]
fn invalid_subcommand_fails() {
    glyphgrid()
        .arg("this-is-not-a-real-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

// ─── Subcommand help ─────────────────────────────────────────────────────────

#[test]
fn extract_help() {
    glyphgrid()
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extract glyph bitmaps"))
        .stdout(predicate::str::contains("[IMAGES]"))
        .stdout(predicate::str::contains("--cell-width"))
        .stdout(predicate::str::contains("--threshold"))
        .stdout(predicate::str::contains("--padding-x"))
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--usage"));
}

#[test]
fn inspect_help() {
    glyphgrid()
        .args(["inspect", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Check grid geometry"))
        .stdout(predicate::str::contains("<IMAGE>"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn config_help() {
    glyphgrid()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("effective configuration"));
}

// ─── Argument validation ─────────────────────────────────────────────────────

#[test]
fn inspect_missing_image_fails() {
    glyphgrid()
        .arg("inspect")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<IMAGE>"));
}

#[test]
fn extract_invalid_format_fails() {
    glyphgrid()
        .args(["extract", "--format", "xml", "font.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn extract_invalid_language_fails() {
    glyphgrid()
        .args(["extract", "--language", "cobol", "font.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn extract_non_numeric_width_fails() {
    glyphgrid()
        .args(["extract", "--cell-width", "wide", "font.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
