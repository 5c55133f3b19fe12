//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `reqwest`. All error types implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Remote errors ─────────────────────────────────────────────────────────────

/// Error returned by every remote port.
///
/// `NotFound` is the only class application services branch on; everything
/// else is propagated to the operator unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Remote(String),
}

// ── Setup errors ──────────────────────────────────────────────────────────────

/// Errors raised by the setup workflow before any remote call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("Provider selection cancelled.")]
    SelectionCancelled,

    #[error("Unknown provider '{slug}'. Run 'logship providers' to list them.")]
    UnknownProvider { slug: String },

    #[error("Provider '{slug}' cannot be provisioned automatically: no add-on type is mapped to it.")]
    UnmappedAddOnType { slug: String },

    #[error("{key} is required for {provider} and cannot be empty.")]
    MissingRequiredValue { provider: String, key: String },

    #[error("Invalid secret assignment '{0}': expected KEY=VALUE")]
    InvalidSecretAssignment(String),

    #[error("{key} is not a setting of {provider}. Valid keys: {valid}")]
    UnexpectedSecret {
        provider: String,
        key: String,
        valid: String,
    },

    #[error("{0} Pass it on the command line when running non-interactively.")]
    NonInteractive(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}
