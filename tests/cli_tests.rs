//! Integration tests for the tptags binary

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::tptags_cmd;

fn write_policy(temp: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = temp.path().join("policy.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_check_prints_normalized_tags() {
    let temp = TempDir::new().unwrap();
    let path = write_policy(
        &temp,
        r#"
name = "process-exec"
tags = ["observability.process", 'say "hi"', "team-a"]
"#,
    );

    let output = tptags_cmd().arg("check").arg(&path).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["observability.process", r#"say \"hi\""#, "team-a"]
    );
}

#[test]
fn test_check_quoted() {
    let temp = TempDir::new().unwrap();
    let path = write_policy(&temp, "tags = ['a\\b']\n");

    tptags_cmd()
        .arg("check")
        .arg(&path)
        .arg("--quoted")
        .assert()
        .success()
        .stdout("\"a\\\\b\"\n");
}

#[test]
fn test_check_policy_without_tags() {
    let temp = TempDir::new().unwrap();
    let path = write_policy(&temp, "name = \"empty\"\n");

    tptags_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout("No tags\n");
}

#[test]
fn test_check_missing_policy() {
    let temp = TempDir::new().unwrap();

    tptags_cmd()
        .arg("check")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Policy file not found"));
}

#[test]
fn test_check_too_many_tags() {
    let temp = TempDir::new().unwrap();
    let tags: Vec<String> = (0..17).map(|i| format!("\"tag{}\"", i)).collect();
    let path = write_policy(&temp, &format!("tags = [{}]\n", tags.join(", ")));

    tptags_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too many tags"));
}

#[test]
fn test_check_malformed_policy() {
    let temp = TempDir::new().unwrap();
    let path = write_policy(&temp, "tags = [\n");

    tptags_cmd()
        .arg("check")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse policy"));
}

#[test]
fn test_validate_args() {
    tptags_cmd()
        .arg("validate")
        .arg("observability.privilege")
        .arg("my tag")
        .assert()
        .success()
        .stdout("observability.privilege\nmy tag\n");
}

#[test]
fn test_validate_no_args() {
    tptags_cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout("No tags\n");
}

#[test]
fn test_validate_too_short_reports_index() {
    tptags_cmd()
        .arg("validate")
        .arg("fine")
        .arg("x")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("custom tag n1: too short"))
        .stderr(predicate::str::contains("tptags defaults"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    tptags_cmd()
        .arg("-v")
        .arg("validate")
        .arg("ab")
        .assert()
        .success()
        .stdout("ab\n")
        .stderr(predicate::str::contains("validated tags"));
}

#[test]
fn test_defaults() {
    tptags_cmd()
        .arg("defaults")
        .assert()
        .success()
        .stdout(
            "observability.filesystem\nobservability.privilege\nobservability.process\n",
        );
}
