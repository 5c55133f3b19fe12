//! Application service: the log shipping setup workflow.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Steps run strictly in order and the first failure aborts the run.
//! Nothing already created is rolled back; every step except credential
//! issuance is safe to repeat.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{Machines, Platform, ProgressReporter, Prompter};
use crate::application::services::addon::{ProvisionedAddOn, provision_auto_addon};
use crate::application::services::credentials::set_credential_and_deploy;
use crate::application::services::provider_secrets::collect_provider_secrets;
use crate::application::services::shipper_app::{ShipperAppOutcome, ensure_shipper_app};
use crate::application::services::shipper_machine::{MachineOutcome, ensure_shipper_machine};
use crate::domain::config::ShipperConfig;
use crate::domain::{Provider, SecretInput, SetupError, list_providers, lookup};

/// Inputs to `run_setup` beyond the ports.
pub struct SetupOptions<'a> {
    /// Provider slug. `None` asks the operator to choose.
    pub provider: Option<&'a str>,
    /// Provider variable values supplied up front, keyed by variable name.
    pub presets: BTreeMap<String, String>,
    /// Image and region for a new shipper machine.
    pub settings: &'a ShipperConfig,
}

/// What a completed setup run did.
#[derive(Debug, Serialize)]
pub struct SetupReport {
    pub target_app: String,
    pub provider: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addon: Option<ProvisionedAddOn>,
    pub shipper: ShipperAppOutcome,
    pub machine: MachineOutcome,
    /// Secret keys written to the shipper app, in order.
    pub secrets: Vec<String>,
}

/// Configure log shipping for `target_app`.
///
/// 1. Fetch the target app and select a provider.
/// 2. Collect provider secrets (before any mutation, so input failures
///    leave nothing behind).
/// 3. Provision the provider add-on when the provider is automatic.
/// 4. Ensure the organization's shipper app and its machine.
/// 5. Issue a fresh log-read credential, write it and the provider secrets,
///    and restart the shipper.
///
/// # Errors
///
/// Returns the first error raised by any step.
pub async fn run_setup(
    api: &impl Platform,
    machines: &impl Machines,
    prompter: &impl Prompter,
    reporter: &impl ProgressReporter,
    target_app: &str,
    opts: SetupOptions<'_>,
) -> Result<SetupReport> {
    let target = api
        .get_app(target_app)
        .await
        .with_context(|| format!("fetching app {target_app}"))?;

    let provider = select_provider(opts.provider, prompter)?;
    tracing::debug!(provider = provider.slug, auto = provider.auto, "provider selected");
    let mut provider_secrets = collect_provider_secrets(provider, &opts.presets, prompter)?;

    let addon = if provider.auto {
        reporter.step(&format!("provisioning {} add-on...", provider.name));
        let addon = provision_auto_addon(api, &target, provider.slug).await?;
        if addon.created {
            reporter.success(&format!("created add-on {}", addon.name));
        } else {
            reporter.success(&format!("add-on {} already provisioned", addon.name));
        }
        provider_secrets.push(SecretInput::new(
            provider.token_secret_key(),
            addon.token.clone(),
        ));
        Some(addon)
    } else {
        None
    };

    let shipper = ensure_shipper_app(
        api,
        machines,
        opts.settings,
        reporter,
        &target.organization,
    )
    .await?;

    let machine =
        ensure_shipper_machine(api, machines, opts.settings, reporter, shipper.app()).await?;
    let machine = match &shipper {
        ShipperAppOutcome::Created {
            machine: launched @ MachineOutcome::Launched { .. },
            ..
        } => launched.clone(),
        _ => machine,
    };

    let secrets =
        set_credential_and_deploy(api, machines, reporter, shipper.app(), &provider_secrets)
            .await?;

    Ok(SetupReport {
        target_app: target.name,
        provider: provider.slug,
        addon,
        shipper,
        machine,
        secrets,
    })
}

/// Resolve the requested provider, or ask the operator for one.
fn select_provider(
    requested: Option<&str>,
    prompter: &impl Prompter,
) -> Result<&'static Provider> {
    if let Some(slug) = requested {
        return lookup(slug).ok_or_else(|| {
            SetupError::UnknownProvider {
                slug: slug.to_string(),
            }
            .into()
        });
    }

    let providers = list_providers();
    let names: Vec<&str> = providers.iter().map(|p| p.name).collect();
    let index = prompter
        .select("Select a logging provider:", &names)?
        .ok_or(SetupError::SelectionCancelled)?;
    providers
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("provider selection out of range: {index}"))
}
