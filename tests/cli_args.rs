//! Tests for the `anymore` binary.
//!
//! Output is captured through a pipe, so the binary never sees a terminal
//! and passes text straight through.

use std::io::Write;
use std::process::{Command, Stdio};

fn anymore_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anymore"));
    cmd.env_remove("ANYMORE_LOG");
    cmd
}

#[test]
fn test_help_shows_options() {
    let output = anymore_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--lines"));
    assert!(stdout.contains("--prompt"));
    assert!(stdout.contains("--disable"));
    assert!(stdout.contains("--no-config"));
}

#[test]
fn test_file_passes_through_when_not_a_terminal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.txt");
    std::fs::write(&path, "one\ntwo\nthree without newline").unwrap();

    let output = anymore_cmd()
        .arg("--no-config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "one\ntwo\nthree without newline"
    );
}

#[test]
fn test_files_are_concatenated() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    std::fs::write(&first, "a\n").unwrap();
    std::fs::write(&second, "b\n").unwrap();

    let output = anymore_cmd()
        .arg("--no-config")
        .arg(&first)
        .arg(&second)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a\nb\n");
}

#[test]
fn test_reads_stdin_by_default() {
    let mut child = anymore_cmd()
        .arg("--no-config")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"from stdin\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "from stdin\n");
}

#[test]
fn test_missing_file_exits_with_error() {
    let output = anymore_cmd()
        .arg("--no-config")
        .arg("/nonexistent/anymore-test-file")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to open"), "got: {stderr}");
}

#[test]
fn test_unknown_plugin_exits_with_error() {
    let output = anymore_cmd()
        .args(["--no-config", "--disable", "colorize"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("colorize"), "got: {stderr}");
}
