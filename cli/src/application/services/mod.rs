//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`; never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod addon;
pub mod config_service;
pub mod credentials;
pub mod provider_secrets;
pub mod ship_setup;
pub mod shipper_app;
pub mod shipper_machine;
