//! Application service: ensure the shipper app has a machine.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{MachineLauncher, MachineLister, ProgressReporter, RegionLocator};
use crate::domain::AppRef;
use crate::domain::LaunchRequest;
use crate::domain::config::ShipperConfig;

/// Outcome of `ensure_shipper_machine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MachineOutcome {
    /// The app already had at least one machine; nothing was launched.
    Existing { count: usize },
    /// A machine was launched by this run.
    Launched { machine_id: String, region: String },
}

/// Ensure `app` has at least one machine, launching one if it has none.
///
/// Only the presence of a machine is checked; state, image and count beyond
/// one are not. New machines go to `settings.region` when it is set and
/// non-blank, otherwise to the nearest region.
///
/// # Errors
///
/// Returns an error if listing, region discovery, or launch fails.
pub async fn ensure_shipper_machine(
    regions: &impl RegionLocator,
    machines: &(impl MachineLister + MachineLauncher),
    settings: &ShipperConfig,
    reporter: &impl ProgressReporter,
    app: &AppRef,
) -> Result<MachineOutcome> {
    let existing = machines
        .list_machines(app)
        .await
        .with_context(|| format!("listing machines of {}", app.name))?;
    if !existing.is_empty() {
        tracing::debug!(app = %app.name, count = existing.len(), "shipper machine present");
        return Ok(MachineOutcome::Existing {
            count: existing.len(),
        });
    }

    let region = match settings.region() {
        Some(region) => region.to_string(),
        None => regions
            .nearest_region()
            .await
            .context("determining nearest region")?,
    };

    reporter.step(&format!("launching log shipper machine in {region}..."));
    let request = LaunchRequest::shipper(&settings.image, &region);
    let machine = machines
        .launch_machine(app, &request)
        .await
        .with_context(|| format!("launching log shipper machine for {}", app.name))?;
    reporter.success(&format!(
        "launched log shipper app {} in the {region} region",
        app.name
    ));

    Ok(MachineOutcome::Launched {
        machine_id: machine.id,
        region,
    })
}
