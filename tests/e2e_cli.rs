//! CLI end-to-end tests
//!
//! Tests for the rowlab command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the rowlab binary
#[allow(deprecated)]
fn rowlab_cmd() -> Command {
    Command::cargo_bin("rowlab").unwrap()
}

/// Write a config pointing the database into `dir`, returning its path.
fn write_config(dir: &Path, seed_count: u64) -> PathBuf {
    let db_path = dir.join("e2e.db");
    let config_path = dir.join("rowlab.toml");
    fs::write(
        &config_path,
        format!(
            "[database]\npath = {:?}\n\n[seed]\ncount = {seed_count}\n",
            db_path
        ),
    )
    .unwrap();
    config_path
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = rowlab_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = rowlab_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowlab"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = rowlab_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowlab"));
}

#[test]
fn test_cli_version_subcommand() {
    let mut cmd = rowlab_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rowlab"));
}

#[test]
fn test_cli_seed_and_scan() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), 1_000);

    let mut cmd = rowlab_cmd();
    cmd.args(["--config", config.to_str().unwrap(), "seed", "--count", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully inserted 250 records"))
        .stdout(predicate::str::contains("Table now holds 250 records"));

    let mut cmd = rowlab_cmd();
    cmd.args(["--config", config.to_str().unwrap(), "scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing completed: 250 records"));
}

#[test]
fn test_cli_seed_uses_configured_count() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), 150);

    let mut cmd = rowlab_cmd();
    cmd.args(["--config", config.to_str().unwrap(), "seed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully inserted 150 records"));
}

#[test]
fn test_cli_seed_appends_on_rerun() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), 1_000);

    for expected_total in ["100", "200"] {
        let mut cmd = rowlab_cmd();
        cmd.args(["--config", config.to_str().unwrap(), "seed", "--count", "100"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Table now holds {expected_total} records"
            )));
    }
}

#[test]
fn test_cli_scan_empty_database() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), 1_000);

    let mut cmd = rowlab_cmd();
    cmd.args(["--config", config.to_str().unwrap(), "scan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing completed: 0 records"));
}

#[test]
fn test_cli_validate_valid_config() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), 1_000);

    let mut cmd = rowlab_cmd();
    cmd.args(["validate", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_cli_validate_malformed_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[database\n").unwrap();

    let mut cmd = rowlab_cmd();
    cmd.args(["validate", path.to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_validate_no_config_uses_defaults() {
    let mut cmd = rowlab_cmd();
    cmd.arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"));
}
