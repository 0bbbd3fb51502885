//! End-to-end CLI tests.
//!
//! Each test runs the binary against a fresh HOME so config and
//! database files never leak between tests (or into the real home
//! directory).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tempo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tempo").expect("binary builds");
    cmd.env("HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_runs() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pomodoro"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}

#[test]
fn test_task_list_empty() {
    let home = TempDir::new().unwrap();
    tempo(&home)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks"));
}

#[test]
fn test_task_add_and_list() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["task", "add", "write the report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("write the report"));

    tempo(&home)
        .args(["task", "list", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("write the report"));
}

#[test]
fn test_task_add_quick_add_markers() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["task", "add", "ship it !high // after review", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"ship it\""))
        .stdout(predicate::str::contains("\"priority\": \"high\""))
        .stdout(predicate::str::contains("\"notes\": \"after review\""));
}

#[test]
fn test_task_done_and_filter() {
    let home = TempDir::new().unwrap();

    tempo(&home).args(["task", "add", "first"]).assert().success();
    tempo(&home).args(["task", "add", "second"]).assert().success();

    tempo(&home)
        .args(["task", "done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("first"));

    tempo(&home)
        .args(["task", "list", "--filter", "active", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 1"))
        .stdout(predicate::str::contains("second"));

    tempo(&home)
        .args(["task", "reopen", "1"])
        .assert()
        .success();

    tempo(&home)
        .args(["task", "list", "--filter", "active", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 2"));
}

#[test]
fn test_task_done_missing_id_fails() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["task", "done", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_task_rm() {
    let home = TempDir::new().unwrap();

    tempo(&home).args(["task", "add", "temporary"]).assert().success();

    tempo(&home)
        .args(["task", "rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed task 1"));

    tempo(&home)
        .args(["task", "list", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"count\": 0"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 25"))
        .stdout(predicate::str::contains("\"sessions_until_long_break\": 4"));
}

#[test]
fn test_config_set_persists() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["config", "set", "work", "50"])
        .assert()
        .success();

    // The change lands in the config file immediately
    assert!(home.path().join(".tempo/config.yaml").exists());

    tempo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 50"));
}

#[test]
fn test_config_set_clamps_zero_duration() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["config", "set", "work", "0"])
        .assert()
        .success();

    tempo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 1"));
}

#[test]
fn test_config_set_unknown_key_fails() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["config", "set", "volume", "11"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
}

#[test]
fn test_config_reset_requires_force() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["config", "reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    tempo(&home)
        .args(["config", "reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults"));
}

#[test]
fn test_history_empty() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions"));
}

#[test]
fn test_report_empty_week() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["report", "week", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_work_minutes\": 0"));
}

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();

    tempo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}
