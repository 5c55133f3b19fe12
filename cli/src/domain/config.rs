//! Domain types and validators for Logship configuration.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::shipper::DEFAULT_SHIPPER_IMAGE;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "api.graphql_url",
    "api.machines_url",
    "shipper.image",
    "shipper.region",
];

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.fly.io/graphql";
pub const DEFAULT_MACHINES_URL: &str = "https://api.machines.dev";

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.logship/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogshipConfig {
    /// Remote endpoints.
    pub api: ApiConfig,
    /// Shipper machine settings.
    pub shipper: ShipperConfig,
}

/// Remote API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint for apps, add-ons, tokens and secrets.
    pub graphql_url: String,
    /// Base URL of the machines API.
    pub machines_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            machines_url: DEFAULT_MACHINES_URL.to_string(),
        }
    }
}

/// Shipper machine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipperConfig {
    /// Image launched on new shipper machines.
    pub image: String,
    /// Region for new shipper machines. Empty means nearest region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for ShipperConfig {
    fn default() -> Self {
        Self {
            image: DEFAULT_SHIPPER_IMAGE.to_string(),
            region: None,
        }
    }
}

impl ShipperConfig {
    /// Configured region, or `None` when unset or blank.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

impl LogshipConfig {
    /// Apply a validated `key = value` assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "api.graphql_url" => self.api.graphql_url = value.to_string(),
            "api.machines_url" => self.api.machines_url = value.to_string(),
            "shipper.image" => self.shipper.image = value.to_string(),
            "shipper.region" => {
                self.shipper.region = Some(value.trim().to_string()).filter(|r| !r.is_empty());
            }
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let reason = match key {
        "api.graphql_url" | "api.machines_url"
            if !(value.starts_with("https://") || value.starts_with("http://")) =>
        {
            Some("URL must start with http:// or https://")
        }
        "shipper.image" if value.trim().is_empty() => Some("Image reference cannot be empty"),
        _ => None,
    };
    if let Some(reason) = reason {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
        .into());
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
