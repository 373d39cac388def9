//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! None of them reach the network: every `send` fails before submission
//! or targets a closed local port.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Smallest valid PNG signature plus padding; enough for sniffing
const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

fn cli_cmd() -> Command {
    Command::cargo_bin("photodrop").expect("Failed to find photodrop binary")
}

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}

// ============================================================================
// Inspect Command Tests
// ============================================================================

#[test]
fn test_inspect_png() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "cat.png", PNG_BYTES);

    cli_cmd()
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("File: cat.png"))
        .stdout(predicate::str::contains("Media type: image/png"))
        .stdout(predicate::str::contains("Size: 12 bytes"))
        .stdout(predicate::str::contains("Accepted: yes"));
}

#[test]
fn test_inspect_sniffs_extensionless_file() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "download", PNG_BYTES);

    cli_cmd()
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Media type: image/png"));
}

#[test]
fn test_inspect_text_file_not_accepted() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "notes.txt", b"hello");

    cli_cmd()
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Accepted: no"));
}

#[test]
fn test_inspect_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "cat.png", PNG_BYTES);

    cli_cmd()
        .env_remove("RUST_LOG")
        .args(["-v", "inspect"])
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("inspected"))
        .stdout(predicate::str::contains("Accepted: yes"));
}

#[test]
fn test_inspect_missing_file() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("inspect")
        .arg(dir.path().join("nope.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// ============================================================================
// Send Command Tests
// ============================================================================

#[test]
fn test_send_without_credentials_reports_missing_input() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "cat.png", PNG_BYTES);

    cli_cmd()
        .arg("send")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please provide image, bot token, and channel ID",
        ));
}

#[test]
fn test_send_blank_chat_id_reports_missing_input() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "cat.png", PNG_BYTES);

    cli_cmd()
        .args(["send", "--token", "123:abc", "--chat-id", "   "])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please provide image"));
}

#[test]
fn test_send_rejects_non_image() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "notes.txt", b"hello");

    cli_cmd()
        .args(["send", "--token", "123:abc", "--chat-id", "@channel"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not an image"));
}

#[test]
fn test_send_unreachable_api_reports_generic_failure() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "cat.png", PNG_BYTES);

    cli_cmd()
        .args(["--api-base", "http://127.0.0.1:1"])
        .args(["send", "--token", "123:abc", "--chat-id", "@channel"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please check your bot token and channel ID",
        ));
}

#[test]
fn test_help_lists_commands() {
    cli_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("inspect"));
}
