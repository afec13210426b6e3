//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
    assert_stdout_contains(&output, "encrypt");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "keybox");
}

#[test]
fn test_errors_use_cross_marker_and_exit_one() {
    let t = Test::init();

    let output = t.pubkey("ghost");
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "✗ private key not found: ghost");
    assert_stderr_contains(&output, "→ run: keybox list");
}

#[test]
fn test_invalid_config_reported() {
    let t = Test::new();
    t.write(".keybox.toml", "[watch]\ninterval_ms = 0\n");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "watch.interval_ms");
}

#[test]
fn test_malformed_config_reported() {
    let t = Test::new();
    t.write(".keybox.toml", "[keybox\n");

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_keybox") || out.contains("complete"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "#compdef keybox");
}

#[test]
fn test_completions_fish() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "complete -c keybox");
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}
