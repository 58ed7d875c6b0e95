//! Integration tests for the `habvoice` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling -- all without requiring a live openHAB server.
#![allow(clippy::unwrap_used)]

use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `habvoice` binary with env isolation.
///
/// Clears all `HABVOICE_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn habvoice_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("habvoice").unwrap();
    cmd.env("HOME", "/tmp/habvoice-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/habvoice-cli-test-nonexistent")
        .env_remove("HABVOICE_PROFILE")
        .env_remove("HABVOICE_SERVER")
        .env_remove("HABVOICE_API_TOKEN")
        .env_remove("HABVOICE_INSECURE")
        .env_remove("HABVOICE_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = habvoice_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    habvoice_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("openHAB")
            .and(predicate::str::contains("run"))
            .and(predicate::str::contains("instructions"))
            .and(predicate::str::contains("switches"))
            .and(predicate::str::contains("shutters")),
    );
}

#[test]
fn test_version_flag() {
    habvoice_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("habvoice"));
}

// ── Argument validation ─────────────────────────────────────────────

#[test]
fn test_switches_requires_ids() {
    habvoice_cmd()
        .args(["switches", "on"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_switches_rejects_unknown_action() {
    habvoice_cmd()
        .args(["switches", "toggle", "lamp1"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_shutters_accepts_stop_action() {
    // Parses fine; fails later because no server is configured.
    let output = habvoice_cmd()
        .args(["shutters", "stop", "sh1"])
        .output()
        .unwrap();

    assert_ne!(output.status.code(), Some(0));
    let text = combined_output(&output);
    assert!(
        text.contains("No server configured"),
        "expected missing-config error, got:\n{text}"
    );
}

// ── Unconfigured runs ───────────────────────────────────────────────

#[test]
fn test_instructions_without_config_fails_with_usage_code() {
    habvoice_cmd()
        .arg("instructions")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No server configured"));
}

#[test]
fn test_status_without_token_reports_missing_credentials() {
    habvoice_cmd()
        .args(["status", "--server", "http://openhab:8080"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No API token"));
}

// ── Offline commands ────────────────────────────────────────────────

#[test]
fn test_config_path_prints_a_path() {
    habvoice_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_completions_bash() {
    habvoice_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("habvoice"));
}
