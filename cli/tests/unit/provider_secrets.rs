//! Tests for `collect_provider_secrets`.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use logship_cli::application::services::provider_secrets::collect_provider_secrets;
use logship_cli::domain::{SetupError, lookup};

use crate::mocks::ScriptedPrompter;

fn presets(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn keys(secrets: &[logship_cli::domain::SecretInput]) -> Vec<&str> {
    secrets.iter().map(|s| s.key.as_str()).collect()
}

#[test]
fn presets_cover_everything_without_prompting() {
    let datadog = lookup("datadog").expect("registered");
    let prompter = ScriptedPrompter::default();
    let secrets = collect_provider_secrets(
        datadog,
        &presets(&[("DATADOG_API_KEY", " key "), ("DATADOG_SITE", "us5")]),
        &prompter,
    )
    .expect("collected");
    assert_eq!(keys(&secrets), ["DATADOG_API_KEY", "DATADOG_SITE"]);
    assert_eq!(secrets[0].value, "key", "values are trimmed");
    assert!(prompter.prompts().is_empty());
}

#[test]
fn missing_values_are_prompted_in_declaration_order() {
    let loki = lookup("loki").expect("registered");
    let prompter = ScriptedPrompter::answering(&["user", "pass"]);
    let secrets = collect_provider_secrets(loki, &presets(&[("LOKI_URL", "https://l")]), &prompter)
        .expect("collected");
    assert_eq!(keys(&secrets), ["LOKI_URL", "LOKI_USERNAME", "LOKI_PASSWORD"]);
    assert_eq!(prompter.prompts(), ["LOKI_USERNAME", "LOKI_PASSWORD"]);
}

#[test]
fn blank_required_value_is_rejected() {
    let humio = lookup("humio").expect("registered");
    let prompter = ScriptedPrompter::answering(&["   "]);
    let err = collect_provider_secrets(humio, &BTreeMap::new(), &prompter).expect_err("blank");
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::MissingRequiredValue { key, .. }) if key == "HUMIO_TOKEN"
    ));
}

#[test]
fn required_value_without_input_fails_non_interactively() {
    let humio = lookup("humio").expect("registered");
    let prompter = ScriptedPrompter::default();
    let err = collect_provider_secrets(humio, &BTreeMap::new(), &prompter).expect_err("no input");
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::NonInteractive(_))
    ));
}

#[test]
fn blank_optional_values_are_skipped() {
    let papertrail = lookup("papertrail").expect("registered");
    let prompter = ScriptedPrompter::answering(&["logs.example:1234", ""]);
    let secrets =
        collect_provider_secrets(papertrail, &BTreeMap::new(), &prompter).expect("collected");
    assert_eq!(keys(&secrets), ["PAPERTRAIL_ENDPOINT"]);
    assert_eq!(
        prompter.prompts(),
        ["PAPERTRAIL_ENDPOINT", "PAPERTRAIL_ENCODING_CODEC (optional)"]
    );
}

#[test]
fn undeclared_preset_is_rejected_before_prompting() {
    let datadog = lookup("datadog").expect("registered");
    let prompter = ScriptedPrompter::answering(&["k"]);
    let err = collect_provider_secrets(datadog, &presets(&[("LOKI_URL", "x")]), &prompter)
        .expect_err("undeclared");
    assert!(matches!(
        err.downcast_ref::<SetupError>(),
        Some(SetupError::UnexpectedSecret { key, .. }) if key == "LOKI_URL"
    ));
    assert!(prompter.prompts().is_empty());
}

#[test]
fn auto_provider_needs_no_secrets() {
    let logtail = lookup("logtail").expect("registered");
    let prompter = ScriptedPrompter::default();
    let secrets = collect_provider_secrets(logtail, &BTreeMap::new(), &prompter).expect("empty");
    assert!(secrets.is_empty());
}
