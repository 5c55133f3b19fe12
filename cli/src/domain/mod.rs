//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `reqwest`, or `std::fs`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod provider;
pub mod shipper;

pub use config::{LogshipConfig, validate_config_key, validate_config_value};
pub use error::{ApiError, ConfigError, SetupError};
pub use provider::{AddOnType, Provider, addon_type_for, list_providers, lookup, parse_secret_assignment};
pub use shipper::{
    AddOn, AppOrganization, AppRef, GuestSpec, LaunchRequest, Machine, SecretInput,
    addon_name, credential_name, shipper_app_name,
};
