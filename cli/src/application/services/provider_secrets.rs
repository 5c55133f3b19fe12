//! Application service: collect the secrets a manual provider needs.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::application::ports::Prompter;
use crate::domain::{Provider, SecretInput, SetupError};

/// Gather every declared variable of `provider`.
///
/// Values come from `presets` first, otherwise from a hidden prompt.
/// Required values must be non-empty after trimming; empty optional values
/// are skipped. Presets the provider does not declare are rejected.
///
/// # Errors
///
/// Returns a `SetupError` for undeclared presets, empty required values, or
/// a required value with no way to ask for it, and propagates prompt
/// failures.
pub fn collect_provider_secrets(
    provider: &Provider,
    presets: &BTreeMap<String, String>,
    prompter: &impl Prompter,
) -> Result<Vec<SecretInput>> {
    if let Some(key) = presets.keys().find(|k| !provider.declares(k)) {
        let valid: Vec<_> = provider.all_vars().collect();
        return Err(SetupError::UnexpectedSecret {
            provider: provider.name.to_string(),
            key: key.clone(),
            valid: if valid.is_empty() {
                "(none)".to_string()
            } else {
                valid.join(", ")
            },
        }
        .into());
    }

    let mut secrets = Vec::new();

    for key in provider.required_vars {
        let Some(value) = value_for(key, true, presets, prompter)? else {
            return Err(SetupError::NonInteractive(format!("No value for {key}.")).into());
        };
        let value = value.trim();
        if value.is_empty() {
            return Err(SetupError::MissingRequiredValue {
                provider: provider.name.to_string(),
                key: (*key).to_string(),
            }
            .into());
        }
        secrets.push(SecretInput::new(*key, value));
    }

    for key in provider.optional_vars {
        match value_for(key, false, presets, prompter)? {
            Some(value) if !value.trim().is_empty() => {
                secrets.push(SecretInput::new(*key, value.trim()));
            }
            _ => tracing::debug!(%key, "optional provider setting left unset"),
        }
    }

    Ok(secrets)
}

fn value_for(
    key: &str,
    required: bool,
    presets: &BTreeMap<String, String>,
    prompter: &impl Prompter,
) -> Result<Option<String>> {
    if let Some(value) = presets.get(key) {
        return Ok(Some(value.clone()));
    }
    let label = if required {
        key.to_string()
    } else {
        format!("{key} (optional)")
    };
    prompter.secret(&label)
}
