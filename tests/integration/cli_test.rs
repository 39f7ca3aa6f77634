//! Integration tests for the command line interface.

use std::fs;
use std::process::Command;

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::fixture;

/// Run the binary with a config path that does not exist yet, so the
/// user's own config never leaks into a test.
fn run_phrasesync(config_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_phrasesync"))
        .args(args)
        .env("PHRASESYNC_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PHRASESYNC_LOG")
        .output()
        .expect("Failed to execute phrasesync");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_phrasesync(&dir, &["--help"]);

    assert_eq!(exit_code, 0);
    for command in ["play", "timeline", "locate", "config", "completions"] {
        assert!(stdout.contains(command), "missing {} in help", command);
    }
}

#[test]
fn locate_help_shows_position_argument() {
    AssertCommand::cargo_bin("phrasesync")
        .unwrap()
        .args(["locate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<POSITION_MS>"));
}

// ============================================================================
// Timeline Tests
// ============================================================================

#[test]
fn timeline_prints_table() {
    let dir = TempDir::new().unwrap();
    let (stdout, stderr, exit_code) =
        run_phrasesync(&dir, &["timeline", &fixture_arg("conversation.json")]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert_eq!(
        stdout,
        "  0  00:00.000  John  Hi\n  1  00:01.100  Jane  Hey\n"
    );
}

#[test]
fn timeline_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) =
        run_phrasesync(&dir, &["timeline", &fixture_arg("uneven.json"), "--json"]);

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let starts: Vec<u64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["startTime"].as_u64().unwrap())
        .collect();
    assert_eq!(starts, [0, 105, 310, 715, 1020, 1025]);
}

#[test]
fn timeline_of_empty_script() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) =
        run_phrasesync(&dir, &["timeline", &fixture_arg("empty.json")]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "Timeline is empty");
}

#[test]
fn timeline_rejects_invalid_script() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) =
        run_phrasesync(&dir, &["timeline", &fixture_arg("invalid.json")]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("Failed to load script"));
}

#[test]
fn timeline_without_script_explains_how_to_pick_one() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_phrasesync(&dir, &["timeline"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("script.default_path"));
}

#[test]
fn timeline_uses_configured_default_script() {
    let dir = TempDir::new().unwrap();
    let config = format!(
        "[script]\ndefault_path = {:?}\n",
        fixture_arg("conversation.json")
    );
    fs::write(dir.path().join("config.toml"), config).unwrap();

    let (stdout, stderr, exit_code) = run_phrasesync(&dir, &["timeline"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("Jane  Hey"));
}

// ============================================================================
// Locate Tests
// ============================================================================

#[test]
fn locate_reports_phrase_and_targets() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_phrasesync(
        &dir,
        &["locate", "1099", &fixture_arg("conversation.json")],
    );

    assert_eq!(exit_code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "position  1099ms  00:01",
            "phrase    #0  John  Hi  (00:00.000)",
            "rewind    0ms",
            "forward   1100ms",
        ]
    );
}

#[test]
fn locate_json_on_last_boundary_wraps_forward() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_phrasesync(
        &dir,
        &["locate", "1100", &fixture_arg("conversation.json"), "--json"],
    );

    assert_eq!(exit_code, 0);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["index"], 1);
    assert_eq!(value["rewind"], 0);
    assert_eq!(value["forward"], 0);
}

#[test]
fn locate_rejects_non_numeric_position() {
    let dir = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_phrasesync(
        &dir,
        &["locate", "soon", &fixture_arg("conversation.json")],
    );

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("POSITION_MS"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_path_honours_environment() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_phrasesync(&dir, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("config.toml"));
    assert!(stdout.contains("(not created, using defaults)"));
}

#[test]
fn config_show_prints_defaults() {
    let dir = TempDir::new().unwrap();
    AssertCommand::cargo_bin("phrasesync")
        .unwrap()
        .args(["config", "show"])
        .env("PHRASESYNC_CONFIG", dir.path().join("config.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("sample_interval_ms = 10"))
        .stdout(predicate::str::contains("follow_selection = true"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_phrasesync(&dir, &["completions", "bash"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("phrasesync"));
}
