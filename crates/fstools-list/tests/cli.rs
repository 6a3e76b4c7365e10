//! End-to-end checks against the compiled `list` binary.

use std::process::{Command, Output};
use tempfile::TempDir;

fn list(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_list"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run list")
}

#[test]
fn help_exits_zero_with_usage() {
    let output = list(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Usage: list [OPTION]... DIRECTORY..."));
    assert!(text.contains("--ino"));
}

#[test]
fn no_directories_given() {
    let output = list(&[]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("fatal: no directories given"));
}

#[test]
fn unknown_option_is_illegal() {
    let output = list(&["-z", "."]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn missing_directory_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    let output = list(&[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn lists_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("one"), b"1").unwrap();
    let root = dir.path().to_str().unwrap();

    let output = list(&[root]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{root}\n> F one; \n")
    );
}

#[test]
fn version_prints_bare_version() {
    let output = list(&["-V"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1.0.0\n");
}
