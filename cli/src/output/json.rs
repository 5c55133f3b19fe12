//! JSON output helpers.
//!
//! Provides the JSON renderer and the error-object formatter used by all
//! `--json` code paths when a command fails.

use anyhow::{Context, Result};

use crate::application::services::ship_setup::SetupReport;
use crate::domain::{ApiError, ConfigError, LogshipConfig, Provider, SetupError};

/// Renders command results as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the provider registry.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_providers(&self, providers: &[Provider]) -> Result<()> {
        print_json(&serde_json::json!({ "providers": providers }))
    }

    /// Render a setup report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_setup(&self, report: &SetupReport) -> Result<()> {
        print_json(report)
    }

    /// Render the configuration and its location.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &LogshipConfig, path: &std::path::Path) -> Result<()> {
        print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        print_json(&serde_json::json!({ "version": version }))
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Stable error code for an error chain, used in JSON error objects.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return match api {
            ApiError::NotFound(_) => "not_found",
            ApiError::Remote(_) => "remote_failure",
        };
    }
    if err.downcast_ref::<SetupError>().is_some() {
        return "user_input";
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "invalid_config";
    }
    "error"
}
