//! Integration tests for `logship config`.
//!
//! Every test sets `LOGSHIP_CONFIG` to a temp path so they never read or
//! write `~/.logship/config.yaml`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn logship() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("logship"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Returns a `TempDir` and the path string for a config file inside it.
fn temp_config_path() -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join("config.yaml")
        .to_string_lossy()
        .into_owned();
    (dir, path)
}

#[test]
fn show_without_file_uses_defaults() {
    let (_dir, path) = temp_config_path();
    logship()
        .args(["config", "show"])
        .env("LOGSHIP_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("flyio/log-shipper"))
        .stdout(predicate::str::contains("(nearest)"));
}

#[test]
fn set_region_then_show() {
    let (_dir, path) = temp_config_path();
    logship()
        .args(["config", "set", "shipper.region", "fra"])
        .env("LOGSHIP_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Set shipper.region = fra"));

    let content = std::fs::read_to_string(&path).expect("written");
    assert!(content.contains("fra"));

    logship()
        .args(["config", "show", "--json"])
        .env("LOGSHIP_CONFIG", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""region": "fra""#));
}

#[cfg(unix)]
#[test]
fn saved_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, path) = temp_config_path();
    logship()
        .args(["config", "set", "shipper.image", "example/shipper:1"])
        .env("LOGSHIP_CONFIG", &path)
        .assert()
        .success();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn unknown_key_is_rejected() {
    let (_dir, path) = temp_config_path();
    logship()
        .args(["config", "set", "shipper.size", "large"])
        .env("LOGSHIP_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting: shipper.size"));
    assert!(!std::path::Path::new(&path).exists());
}

#[test]
fn invalid_url_is_rejected_with_json_error() {
    let (_dir, path) = temp_config_path();
    let output = logship()
        .args(["config", "set", "api.graphql_url", "ftp://x", "--json"])
        .env("LOGSHIP_CONFIG", &path)
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "invalid_config");
}
