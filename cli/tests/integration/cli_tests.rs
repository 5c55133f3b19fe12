//! Integration tests for the CLI surface: help, version and providers.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn logship() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("logship"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_args_shows_help_and_exits_two() {
    logship().assert().code(2).stderr(predicate::str::contains(
        "Ship an application's logs to an external provider",
    ));
}

#[test]
fn help_lists_commands() {
    logship()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ship"))
        .stdout(predicate::str::contains("providers"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn help_does_not_leak_access_token() {
    logship()
        .args(["ship", "--help"])
        .env("FLY_API_TOKEN", "very-secret-token")
        .assert()
        .success()
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("very-secret-token").not());
}

#[test]
fn version_command_shows_version() {
    logship()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("logship 0.1.0"));
}

#[test]
fn version_command_json_outputs_valid_json() {
    logship()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version": "0.1.0""#));
}

#[test]
fn providers_lists_registry() {
    logship()
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("datadog"))
        .stdout(predicate::str::contains("DATADOG_API_KEY"))
        .stdout(predicate::str::contains("[auto]"));
}

#[test]
fn providers_json_is_parseable() {
    let output = logship()
        .args(["providers", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let providers = v["providers"].as_array().expect("array");
    assert_eq!(providers.len(), 15);
    assert!(
        providers
            .iter()
            .any(|p| p["slug"] == "logtail" && p["auto"] == true)
    );
}

#[test]
fn conventional_no_color_values_are_accepted() {
    for value in ["1", "yes", ""] {
        logship()
            .arg("providers")
            .env("NO_COLOR", value)
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}
