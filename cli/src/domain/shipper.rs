//! Shipper resource types, fixed launch parameters, and deterministic naming.
//!
//! This module is intentionally free of I/O, async, and external layer imports.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Role tag marking the per-organization shipper application.
pub const SHIPPER_ROLE: &str = "log-shipper";

/// Name given to the shipper machine.
pub const SHIPPER_MACHINE_NAME: &str = "log-shipper";

/// Shipper image used when the configuration does not override it.
pub const DEFAULT_SHIPPER_IMAGE: &str = "flyio/log-shipper:auto-a14aa63";

/// Scope of the log-read credential.
pub const CREDENTIAL_SCOPE: &str = "read_organization_apps";

/// Secret key holding the log-read credential on the shipper app.
pub const NATS_TOKEN_KEY: &str = "NATS_TOKEN";

const PLATFORM_VERSION_KEY: &str = "fly_platform_version";
const PLATFORM_VERSION: &str = "v2";
const MANAGED_POSTGRES_KEY: &str = "fly-managed-postgres";
const MANAGED_BY_DEPLOY_KEY: &str = "managed-by-fly-deploy";

// ── Naming ────────────────────────────────────────────────────────────────────

/// Name of the shipper app created for an organization.
#[must_use]
pub fn shipper_app_name(org_raw_slug: &str) -> String {
    format!("{org_raw_slug}-auto-log-shipper")
}

/// Name of the add-on provisioned for a target app.
#[must_use]
pub fn addon_name(app_name: &str) -> String {
    format!("{app_name}-log-shipper")
}

/// Name of the log-read credential issued for an organization.
#[must_use]
pub fn credential_name(org_slug: &str) -> String {
    format!("{org_slug}-logs")
}

// ── Remote resource types ─────────────────────────────────────────────────────

/// Organization fields carried with every application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppOrganization {
    pub id: String,
    pub slug: String,
    pub raw_slug: String,
}

/// Basic application fields: used for both the target app and the shipper app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRef {
    pub id: String,
    pub name: String,
    pub organization: AppOrganization,
}

/// A managed add-on and its access token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub token: String,
}

impl fmt::Debug for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddOn")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A compute instance as reported by the machines API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub state: String,
}

/// Guest resources for a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSpec {
    pub cpu_kind: String,
    pub cpus: u32,
    pub memory_mb: u32,
}

impl GuestSpec {
    /// The fixed shape of every shipper machine: 1 shared vCPU, 256 MB.
    #[must_use]
    pub fn shipper() -> Self {
        Self {
            cpu_kind: "shared".to_string(),
            cpus: 1,
            memory_mb: 256,
        }
    }
}

/// Everything needed to launch one machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRequest {
    pub name: String,
    pub region: String,
    pub image: String,
    pub guest: GuestSpec,
    pub metadata: BTreeMap<String, String>,
}

impl LaunchRequest {
    /// Build the launch request for a shipper machine in `region`.
    #[must_use]
    pub fn shipper(image: &str, region: &str) -> Self {
        let metadata = [
            (PLATFORM_VERSION_KEY, PLATFORM_VERSION),
            (MANAGED_POSTGRES_KEY, "true"),
            (MANAGED_BY_DEPLOY_KEY, "true"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            name: SHIPPER_MACHINE_NAME.to_string(),
            region: region.to_string(),
            image: image.to_string(),
            guest: GuestSpec::shipper(),
            metadata,
        }
    }
}

/// One secret to write on an application.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SecretInput {
    pub key: String,
    pub value: String,
}

impl SecretInput {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Debug for SecretInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretInput")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}
