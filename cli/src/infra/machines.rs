//! Machines API client.
//!
//! Implements machine listing and launch, and the restart-only redeploy
//! used to roll new secrets onto running shipper machines.

use std::collections::BTreeMap;

use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{
    ApiResult, Deployer, MachineLauncher, MachineLister, RedeployOptions,
};
use crate::domain::{ApiError, AppRef, GuestSpec, LaunchRequest, Machine};
use crate::infra::http::{authorization, build_client, check_status, transport_error};

/// Seconds the API waits for a machine to reach `started` after restart.
const WAIT_TIMEOUT_SECS: u32 = 60;

/// Client for the machines REST API.
pub struct MachinesClient {
    http: Client,
    base_url: String,
    authorization: String,
}

#[derive(Serialize)]
struct LaunchBody<'a> {
    name: &'a str,
    region: &'a str,
    config: MachineConfig<'a>,
}

#[derive(Serialize)]
struct MachineConfig<'a> {
    image: &'a str,
    guest: &'a GuestSpec,
    metadata: &'a BTreeMap<String, String>,
}

impl std::fmt::Debug for MachinesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachinesClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl MachinesClient {
    /// Create a client for `base_url` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, token: &str) -> ApiResult<Self> {
        Ok(Self {
            http: build_client()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            authorization: authorization(token),
        })
    }

    fn machines_url(&self, app: &str) -> String {
        format!("{}/v1/apps/{app}/machines", self.base_url)
    }

    async fn restart(&self, app: &AppRef, machine: &Machine) -> ApiResult<()> {
        let what = format!("restart of machine {} in {}", machine.id, app.name);
        let url = format!("{}/{}/restart", self.machines_url(&app.name), machine.id);
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(|e| transport_error(&what, &e))?;
        check_status(&what, response).await?;
        Ok(())
    }

    async fn wait_started(&self, app: &AppRef, machine: &Machine) -> ApiResult<()> {
        let what = format!("health of machine {} in {}", machine.id, app.name);
        let url = format!("{}/{}/wait", self.machines_url(&app.name), machine.id);
        let timeout = WAIT_TIMEOUT_SECS.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[("state", "started"), ("timeout", timeout.as_str())])
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(|e| transport_error(&what, &e))?;
        check_status(&what, response).await?;
        Ok(())
    }
}

impl MachineLister for MachinesClient {
    async fn list_machines(&self, app: &AppRef) -> ApiResult<Vec<Machine>> {
        let what = format!("machines of {}", app.name);
        tracing::debug!(app = %app.name, "listing machines");
        let response = self
            .http
            .get(self.machines_url(&app.name))
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(|e| transport_error(&what, &e))?;
        check_status(&what, response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Remote(format!("{what}: invalid response: {e}")))
    }
}

impl MachineLauncher for MachinesClient {
    async fn launch_machine(&self, app: &AppRef, request: &LaunchRequest) -> ApiResult<Machine> {
        let what = format!("launch of {} in {}", request.name, app.name);
        let body = LaunchBody {
            name: &request.name,
            region: &request.region,
            config: MachineConfig {
                image: &request.image,
                guest: &request.guest,
                metadata: &request.metadata,
            },
        };
        tracing::debug!(app = %app.name, region = %request.region, image = %request.image, "launching machine");
        let response = self
            .http
            .post(self.machines_url(&app.name))
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(&what, &e))?;
        check_status(&what, response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Remote(format!("{what}: invalid response: {e}")))
    }
}

impl Deployer for MachinesClient {
    async fn redeploy(&self, app: &AppRef, options: RedeployOptions) -> ApiResult<()> {
        let machines = self.list_machines(app).await?;
        tracing::debug!(app = %app.name, count = machines.len(), ?options, "restart-only redeploy");
        for machine in &machines {
            self.restart(app, machine).await?;
            if !options.skip_health_checks {
                self.wait_started(app, machine).await?;
            }
        }
        Ok(())
    }
}
