//! Application service: ensure the organization's shipper app exists.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{
    AppDirectory, CreateAppInput, MachineLauncher, MachineLister, ProgressReporter, RegionLocator,
};
use crate::application::services::shipper_machine::{MachineOutcome, ensure_shipper_machine};
use crate::domain::config::ShipperConfig;
use crate::domain::shipper::SHIPPER_ROLE;
use crate::domain::{AppOrganization, AppRef, shipper_app_name};

/// Outcome of `ensure_shipper_app`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShipperAppOutcome {
    /// An app tagged `log-shipper` already existed.
    Existing { app: AppRef },
    /// The app was created by this run, together with its first machine.
    Created { app: AppRef, machine: MachineOutcome },
}

impl ShipperAppOutcome {
    /// The shipper app, whichever way it was obtained.
    #[must_use]
    pub fn app(&self) -> &AppRef {
        match self {
            Self::Existing { app } | Self::Created { app, .. } => app,
        }
    }

    /// Consume the outcome, keeping the app.
    #[must_use]
    pub fn into_app(self) -> AppRef {
        match self {
            Self::Existing { app } | Self::Created { app, .. } => app,
        }
    }
}

/// Ensure exactly one app with the `log-shipper` role exists in `org`.
///
/// The first app returned by the role lookup is canonical. When none exists,
/// `<raw-slug>-auto-log-shipper` is created and given a machine before this
/// returns.
///
/// # Errors
///
/// Propagates lookup, creation and machine-launch failures unchanged.
pub async fn ensure_shipper_app(
    api: &(impl AppDirectory + RegionLocator),
    machines: &(impl MachineLister + MachineLauncher),
    settings: &ShipperConfig,
    reporter: &impl ProgressReporter,
    org: &AppOrganization,
) -> Result<ShipperAppOutcome> {
    let apps = api
        .apps_by_role(SHIPPER_ROLE, &org.id)
        .await
        .with_context(|| format!("looking up log shipper app in {}", org.slug))?;

    let count = apps.len();
    if let Some(app) = apps.into_iter().next() {
        if count > 1 {
            reporter.warn(&format!(
                "{count} log shipper apps found in {}; using {}",
                org.slug, app.name
            ));
        }
        tracing::debug!(app = %app.name, org = %org.slug, "reusing log shipper app");
        return Ok(ShipperAppOutcome::Existing { app });
    }

    let input = CreateAppInput {
        organization_id: org.id.clone(),
        role_id: SHIPPER_ROLE.to_string(),
        name: shipper_app_name(&org.raw_slug),
        machines: true,
    };
    reporter.step(&format!("creating log shipper app {}...", input.name));
    let app = api
        .create_app(&input)
        .await
        .with_context(|| format!("creating app {}", input.name))?;
    reporter.success(&format!("created log shipper app {}", app.name));

    let machine = ensure_shipper_machine(api, machines, settings, reporter, &app).await?;
    Ok(ShipperAppOutcome::Created { app, machine })
}
