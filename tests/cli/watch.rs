//! Tests for `keybox decrypt --watch`.

use std::io::{BufRead, BufReader};
use std::process::Stdio;
use std::thread;
use std::time::Duration;

use crate::support::*;

#[test]
fn test_watch_times_out() {
    let t = Test::with_keys(&["alice"]);
    let clip = t.write("clip.txt", "old contents");
    t.write(".keybox.toml", "[watch]\ninterval_ms = 20\n");

    let output = t
        .cmd()
        .args([
            "decrypt",
            "--key",
            "alice",
            "--in",
            clip.to_str().unwrap(),
            "--watch",
            "--timeout",
            "1",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "timed out after 1s");
}

#[test]
fn test_watch_decrypts_new_content() {
    let t = Test::with_keys(&["alice"]);
    let clip = t.write("clip.txt", "");
    t.write(".keybox.toml", "[watch]\ninterval_ms = 20\ntimeout_secs = 30\n");

    let ciphertext = stdout(&t.encrypt_me("alice", "arrived later"));

    let mut child = t
        .std_cmd()
        .args(["decrypt", "--key", "alice", "--in", clip.to_str().unwrap(), "--watch"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the hint is printed once the command is about to take its baseline
    let mut reader = BufReader::new(child.stderr.take().unwrap());
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    assert!(line.contains("waiting for"), "unexpected stderr: {}", line);
    thread::sleep(Duration::from_millis(200));

    std::fs::write(&clip, ciphertext).unwrap();

    let output = child.wait_with_output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), "arrived later");
}

#[test]
fn test_watch_requires_input_file() {
    let t = Test::with_keys(&["alice"]);

    let output = t
        .cmd()
        .args(["decrypt", "--key", "alice", "--watch"])
        .output()
        .unwrap();
    assert_failure(&output);
}
