//! Lint subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_lint_clean_stdin() {
    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .write_stdin("# Heading\n\n- alpha\n- bravo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_reports_long_heading() {
    let input = format!("# {}\n", "a".repeat(70));
    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use headings shorter than `60`"))
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_lint_reports_list_spacing() {
    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .write_stdin("- first item continues\n  onto a second line\n- second item\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Missing new line after list item"))
        .stdout(predicate::str::contains("list-item-spacing"));
}

#[test]
fn test_lint_check_exits_nonzero_on_findings() {
    let input = format!("# {}\n", "a".repeat(70));
    cargo_bin_cmd!("mdstyle")
        .args(["lint", "--check"])
        .write_stdin(input)
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_lint_check_passes_clean_input() {
    cargo_bin_cmd!("mdstyle")
        .args(["lint", "--check"])
        .write_stdin("# Heading\n")
        .assert()
        .success();
}

#[test]
fn test_lint_file_argument() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("doc.md");
    fs::write(&file, "- alpha\n\n- bravo\n\n- charlie\n").unwrap();

    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extraneous new line after list item"))
        .stdout(predicate::str::contains("doc.md"));
}

#[test]
fn test_lint_with_custom_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[heading-length]\nmax-length = 10\n").unwrap();

    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .arg("--config")
        .arg(&config)
        .write_stdin("# A heading over ten characters\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use headings shorter than `10`"));
}

#[test]
fn test_lint_config_discovered_next_to_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".mdstyle.toml"),
        "[heading-length]\nmax-length = 10\n",
    )
    .unwrap();
    let file = dir.path().join("doc.md");
    fs::write(&file, "# A heading over ten characters\n").unwrap();

    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Use headings shorter than `10`"));
}

#[test]
fn test_lint_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[heading-length]\nmax-length = \"sixty\"\n").unwrap();

    cargo_bin_cmd!("mdstyle")
        .arg("lint")
        .arg("--config")
        .arg(&config)
        .write_stdin("# Heading\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_lint_missing_file() {
    cargo_bin_cmd!("mdstyle")
        .args(["lint", "does-not-exist.md"])
        .assert()
        .failure();
}
