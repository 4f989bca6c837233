//! CLI smoke tests for junc.
//!
//! These verify flag handling and exit codes without touching real
//! junctions.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the junc binary.
fn junc_cmd() -> Command {
  cargo_bin_cmd!("junc")
}

#[test]
fn help_flag_works() {
  junc_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  junc_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("junc"));
}

#[test]
fn no_operation_is_a_usage_error() {
  junc_cmd()
    .assert()
    .failure()
    .stderr(predicate::str::contains("required"));
}

#[test]
fn config_and_clean_conflict() {
  junc_cmd()
    .args(["--config", "a.cfg", "--clean", "somedir"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_config_file_fails() {
  junc_cmd()
    .args(["--config", "/definitely/not/here.cfg"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to process"));
}

#[test]
fn missing_clean_directory_fails() {
  let temp = TempDir::new().unwrap();
  junc_cmd()
    .arg("--clean")
    .arg(temp.path().join("nope"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn empty_config_succeeds_with_summary() {
  let temp = TempDir::new().unwrap();
  let config = temp.path().join("junctions.cfg");
  std::fs::write(&config, "# nothing to do\n").unwrap();

  junc_cmd()
    .arg("--config")
    .arg(&config)
    .assert()
    .success()
    .stdout(predicate::str::contains("Finished processing"));
}
