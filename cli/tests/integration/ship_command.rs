//! Integration tests for `logship ship` failure paths that need no platform.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with an isolated config pointing every API at a closed port.
fn logship(dir: &TempDir) -> Command {
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "api:\n  graphql_url: http://127.0.0.1:9/graphql\n  machines_url: http://127.0.0.1:9\n",
    )
    .expect("write config");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("logship"));
    cmd.env("NO_COLOR", "1")
        .env("LOGSHIP_CONFIG", &path)
        .env_remove("FLY_API_TOKEN")
        .env_remove("FLY_APP");
    cmd
}

#[test]
fn app_is_required() {
    let dir = TempDir::new().expect("temp dir");
    logship(&dir)
        .args(["ship", "--provider", "logtail"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--app"));
}

#[test]
fn missing_token_fails() {
    let dir = TempDir::new().expect("temp dir");
    logship(&dir)
        .args(["ship", "--app", "web", "--provider", "logtail", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("FLY_API_TOKEN"));
}

#[test]
fn malformed_set_is_a_user_error() {
    let dir = TempDir::new().expect("temp dir");
    let output = logship(&dir)
        .args(["ship", "-a", "web", "--set", "NOEQUALS", "--json"])
        .env("FLY_API_TOKEN", "t")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(v["code"], "user_input");
    assert!(v["message"].as_str().expect("message").contains("KEY=VALUE"));
}

#[test]
fn unreachable_platform_is_a_remote_failure() {
    let dir = TempDir::new().expect("temp dir");
    let output = logship(&dir)
        .args(["ship", "--app", "web", "--provider", "logtail", "--yes", "--json"])
        .env("FLY_API_TOKEN", "t")
        .output()
        .expect("run");
    assert_eq!(output.status.code(), Some(1));
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json error");
    assert_eq!(v["error"], true);
    assert_eq!(v["code"], "remote_failure");
}
