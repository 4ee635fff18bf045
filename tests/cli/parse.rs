//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("mdstyle")
        .arg("parse")
        .write_stdin("# Heading\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heading"));
}

#[test]
fn test_parse_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("doc.md");
    fs::write(&file, "- alpha\n- bravo\n").unwrap();

    cargo_bin_cmd!("mdstyle")
        .arg("parse")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("List"))
        .stdout(predicate::str::contains("alpha"));
}
