//! Application layer: port trait definitions and use-case orchestration.
//!
//! This module depends only on `crate::domain`; never on `crate::infra`,
//! `crate::commands`, or `crate::output`.

pub mod ports;
pub mod services;

pub use ports::{
    AccessTokenRequest, AddOnDirectory, ApiResult, AppDirectory, ConfigStore, CreateAddOnInput,
    CreateAppInput, Deployer, MachineLauncher, MachineLister, Machines, Platform,
    ProgressReporter, Prompter, RedeployOptions, RegionLocator, SecretStore, TokenIssuer,
};
