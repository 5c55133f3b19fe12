//! Application service: managed add-on provisioning for automatic providers.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{AddOnDirectory, CreateAddOnInput};
use crate::domain::{ApiError, AppRef, SetupError, addon_name, addon_type_for};

/// Result of `provision_auto_addon`.
#[derive(Clone, Serialize)]
pub struct ProvisionedAddOn {
    /// Deterministic add-on name.
    pub name: String,
    /// `true` when this run created the add-on.
    pub created: bool,
    /// Access token of the add-on.
    #[serde(skip)]
    pub token: String,
}

impl std::fmt::Debug for ProvisionedAddOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvisionedAddOn")
            .field("name", &self.name)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

/// Ensure the add-on `<target>-log-shipper` exists and return its token.
///
/// An existing add-on is reused. A missing one is created with the type
/// mapped from `provider_slug`. Providers outside the add-on type table are
/// rejected before any remote call.
///
/// # Errors
///
/// Returns `SetupError::UnmappedAddOnType` for unmapped providers, and
/// propagates any lookup failure other than not-found and any creation
/// failure.
pub async fn provision_auto_addon(
    api: &impl AddOnDirectory,
    target: &AppRef,
    provider_slug: &str,
) -> Result<ProvisionedAddOn> {
    let addon_type = addon_type_for(provider_slug).ok_or_else(|| SetupError::UnmappedAddOnType {
        slug: provider_slug.to_string(),
    })?;
    let name = addon_name(&target.name);

    match api.get_addon(&name).await {
        Ok(existing) => {
            tracing::debug!(addon = %name, "add-on already provisioned");
            Ok(ProvisionedAddOn {
                name,
                created: false,
                token: existing.token,
            })
        }
        Err(ApiError::NotFound(what)) => {
            tracing::debug!(addon = %name, %what, "add-on not found, creating");
            let input = CreateAddOnInput {
                organization_id: target.organization.id.clone(),
                name: name.clone(),
                app_id: target.id.clone(),
                addon_type,
            };
            let created = api
                .create_addon(&input)
                .await
                .with_context(|| format!("creating add-on {name}"))?;
            Ok(ProvisionedAddOn {
                name,
                created: true,
                token: created.token,
            })
        }
        Err(e) => Err(e).with_context(|| format!("looking up add-on {name}")),
    }
}
