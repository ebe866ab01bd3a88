use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn wordfreq(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordfreq"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn prints_report_line_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("abc.txt"), "a B b\nc c C\n").unwrap();

    let output = wordfreq(temp.path(), &["abc.txt"]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[('c', 3), ('b', 2), ('a', 1)]\n"
    );
}

#[test]
fn missing_file_fails_without_stdout() {
    let temp = TempDir::new().unwrap();

    let output = wordfreq(temp.path(), &["missing.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr was: {stderr}");
    assert!(stderr.contains("missing.txt"), "stderr was: {stderr}");
}

#[test]
fn invalid_utf8_fails_without_stdout() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("latin1.txt"), b"caf\xe9").unwrap();

    let output = wordfreq(temp.path(), &["latin1.txt"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn no_argument_reads_default_corpus_path() {
    let temp = TempDir::new().unwrap();
    let output = wordfreq(temp.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pride_and_prejudice.txt"));

    fs::create_dir(temp.path().join("data")).unwrap();
    fs::write(
        temp.path().join("data/pride_and_prejudice.txt"),
        "It is a truth universally acknowledged",
    )
    .unwrap();
    let output = wordfreq(temp.path(), &[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "[('a', 1), ('acknowledged', 1), ('is', 1), ('it', 1), ('truth', 1), ('universally', 1)]\n"
    );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    let output = wordfreq(temp.path(), &["--top", "5"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
