//! Application service: log-read credential issuance and shipper redeploy.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//!
//! A fresh credential is issued on every run; an existing one is never looked
//! up or reused.

use anyhow::{Context, Result};

use crate::application::ports::{
    AccessTokenRequest, Deployer, ProgressReporter, RedeployOptions, SecretStore, TokenIssuer,
};
use crate::domain::shipper::{CREDENTIAL_SCOPE, NATS_TOKEN_KEY};
use crate::domain::{AppRef, SecretInput, credential_name};

/// Issue a log-read credential for the shipper's organization, write it and
/// any provider secrets to the shipper, then restart the shipper.
///
/// `NATS_TOKEN` is written first, provider secrets second, and exactly one
/// restart-only redeploy (health checks skipped) follows. Returns the secret
/// keys written, in order.
///
/// # Errors
///
/// Propagates token, secret-write and redeploy failures. Nothing is undone:
/// a failed secret write leaves the issued credential unused.
pub async fn set_credential_and_deploy(
    api: &(impl TokenIssuer + SecretStore),
    deployer: &impl Deployer,
    reporter: &impl ProgressReporter,
    shipper: &AppRef,
    provider_secrets: &[SecretInput],
) -> Result<Vec<String>> {
    let org = &shipper.organization;
    let request = AccessTokenRequest {
        name: credential_name(&org.slug),
        organization_id: org.id.clone(),
        profile: CREDENTIAL_SCOPE.to_string(),
        profile_params: None,
        expiry: None,
    };

    reporter.step("issuing log access token...");
    let token = api
        .create_limited_access_token(&request)
        .await
        .with_context(|| format!("creating access token {}", request.name))?;

    api.set_secrets(&shipper.id, &[SecretInput::new(NATS_TOKEN_KEY, token)])
        .await
        .with_context(|| format!("setting {NATS_TOKEN_KEY} on {}", shipper.name))?;
    let mut written = vec![NATS_TOKEN_KEY.to_string()];

    if !provider_secrets.is_empty() {
        reporter.step("setting provider secrets...");
        api.set_secrets(&shipper.id, provider_secrets)
            .await
            .with_context(|| format!("setting provider secrets on {}", shipper.name))?;
        written.extend(provider_secrets.iter().map(|s| s.key.clone()));
    }

    reporter.step(&format!("restarting {}...", shipper.name));
    deployer
        .redeploy(
            shipper,
            RedeployOptions {
                skip_health_checks: true,
            },
        )
        .await
        .with_context(|| format!("redeploying {}", shipper.name))?;
    reporter.success(&format!("{} restarted with new secrets", shipper.name));

    Ok(written)
}
