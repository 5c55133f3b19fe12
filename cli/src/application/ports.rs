//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`; never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Remote ports return `ApiResult`, so services branch on
//! `ApiError::NotFound` by pattern instead of inspecting messages.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::provider::AddOnType;
use crate::domain::{AddOn, ApiError, AppRef, LaunchRequest, LogshipConfig, Machine, SecretInput};

/// Result type of every remote port.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

// ── Value Types ───────────────────────────────────────────────────────────────

/// Parameters for creating an application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAppInput {
    pub organization_id: String,
    pub role_id: String,
    pub name: String,
    /// Create the app on the machines platform.
    pub machines: bool,
}

/// Parameters for creating a managed add-on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAddOnInput {
    pub organization_id: String,
    pub name: String,
    pub app_id: String,
    pub addon_type: AddOnType,
}

/// Parameters for issuing a scoped access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTokenRequest {
    pub name: String,
    pub organization_id: String,
    /// Token profile, e.g. `read_organization_apps`.
    pub profile: String,
    /// Extra profile parameters. Unused by the shipper.
    pub profile_params: Option<String>,
    /// Token expiry. Unused by the shipper.
    pub expiry: Option<String>,
}

/// Redeploy behaviour. Redeploys are always restart-only: no image or
/// config change is rolled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedeployOptions {
    /// Do not wait for machines to pass health checks after restart.
    pub skip_health_checks: bool,
}

// ── Platform API Ports ────────────────────────────────────────────────────────

/// Application lookups and creation.
#[allow(async_fn_in_trait)]
pub trait AppDirectory {
    /// Fetch an application by name.
    async fn get_app(&self, name: &str) -> ApiResult<AppRef>;
    /// List applications in an organization tagged with `role`.
    async fn apps_by_role(&self, role: &str, organization_id: &str) -> ApiResult<Vec<AppRef>>;
    /// Create an application.
    async fn create_app(&self, input: &CreateAppInput) -> ApiResult<AppRef>;
}

/// Managed add-on lookups and creation.
#[allow(async_fn_in_trait)]
pub trait AddOnDirectory {
    /// Fetch an add-on by name. Absent add-ons yield `ApiError::NotFound`.
    async fn get_addon(&self, name: &str) -> ApiResult<AddOn>;
    /// Create an add-on.
    async fn create_addon(&self, input: &CreateAddOnInput) -> ApiResult<AddOn>;
}

/// Scoped access-token issuance.
#[allow(async_fn_in_trait)]
pub trait TokenIssuer {
    /// Create a new token and return its value.
    async fn create_limited_access_token(&self, request: &AccessTokenRequest) -> ApiResult<String>;
}

/// Application secret writes.
#[allow(async_fn_in_trait)]
pub trait SecretStore {
    /// Set `secrets` on the application, in order.
    async fn set_secrets(&self, app_id: &str, secrets: &[SecretInput]) -> ApiResult<()>;
}

/// Region discovery.
#[allow(async_fn_in_trait)]
pub trait RegionLocator {
    /// Code of the region nearest to the caller.
    async fn nearest_region(&self) -> ApiResult<String>;
}

/// Composite trait: everything the setup workflow needs from the platform API.
pub trait Platform: AppDirectory + AddOnDirectory + TokenIssuer + SecretStore + RegionLocator {}

impl<T> Platform for T where
    T: AppDirectory + AddOnDirectory + TokenIssuer + SecretStore + RegionLocator
{
}

// ── Compute Ports ─────────────────────────────────────────────────────────────

/// Machine listing.
#[allow(async_fn_in_trait)]
pub trait MachineLister {
    /// List the machines belonging to `app`.
    async fn list_machines(&self, app: &AppRef) -> ApiResult<Vec<Machine>>;
}

/// Machine creation.
#[allow(async_fn_in_trait)]
pub trait MachineLauncher {
    /// Launch one machine for `app`.
    async fn launch_machine(&self, app: &AppRef, request: &LaunchRequest) -> ApiResult<Machine>;
}

/// Deployment trigger.
#[allow(async_fn_in_trait)]
pub trait Deployer {
    /// Restart every machine of `app` so it picks up new secrets.
    async fn redeploy(&self, app: &AppRef, options: RedeployOptions) -> ApiResult<()>;
}

/// Composite trait: machine lifecycle plus deployment.
pub trait Machines: MachineLister + MachineLauncher + Deployer {}

impl<T> Machines for T where T: MachineLister + MachineLauncher + Deployer {}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Prompt Port ───────────────────────────────────────────────────────────────

/// Operator input.
pub trait Prompter {
    /// Single-choice selection. `Ok(None)` means the operator cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if no terminal is available or input fails.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<Option<usize>>;

    /// Hidden text input for a secret value. `Ok(None)` means input is
    /// unavailable (non-interactive run).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails.
    fn secret(&self, prompt: &str) -> Result<Option<String>>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<LogshipConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &LogshipConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
