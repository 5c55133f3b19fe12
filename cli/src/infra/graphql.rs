//! Platform GraphQL client.
//!
//! Implements the app, add-on, token, secret and region ports. GraphQL
//! errors are classified once here: a `NOT_FOUND` extension code or a
//! "Could not find" message becomes `ApiError::NotFound`, anything else
//! `ApiError::Remote`.

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::application::ports::{
    AccessTokenRequest, AddOnDirectory, ApiResult, AppDirectory, CreateAddOnInput,
    CreateAppInput, RegionLocator, SecretStore, TokenIssuer,
};
use crate::domain::{AddOn, ApiError, AppRef, SecretInput};
use crate::infra::http::{authorization, build_client, status_error, transport_error};

const APP_FIELDS: &str = "id name organization { id slug rawSlug }";

const GET_APP: &str = "query GetApp($name: String!) { app(name: $name) { %APP% } }";

const GET_APPS_BY_ROLE: &str = "query GetAppsByRole($role: String!, $organizationId: ID!) { \
     apps(role: $role, organizationId: $organizationId) { nodes { %APP% } } }";

const CREATE_APP: &str = "mutation CreateApp($input: CreateAppInput!) { \
     createApp(input: $input) { app { %APP% } } }";

const GET_ADD_ON: &str = "query GetAddOn($name: String) { addOn(name: $name) { id name token } }";

const CREATE_ADD_ON: &str = "mutation CreateAddOn($input: CreateAddOnInput!) { \
     createAddOn(input: $input) { addOn { id name token } } }";

const CREATE_LIMITED_ACCESS_TOKEN: &str = "mutation CreateLimitedAccessToken(\
     $name: String!, $organizationId: ID!, $profile: String!, $profileParams: JSON, $expiry: String) { \
     createLimitedAccessToken(input: { name: $name, organizationId: $organizationId, \
     profile: $profile, profileParams: $profileParams, expiry: $expiry }) { \
     limitedAccessToken { token } } }";

const SET_SECRETS: &str = "mutation SetSecrets($input: SetSecretsInput!) { \
     setSecrets(input: $input) { release { id } } }";

const NEAREST_REGION: &str = "query NearestRegion { nearestRegion { code } }";

/// Client for the platform GraphQL endpoint.
pub struct GraphqlClient {
    http: Client,
    endpoint: String,
    authorization: String,
}

impl std::fmt::Debug for GraphqlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GraphqlClient {
    /// Create a client for `endpoint` authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: &str, token: &str) -> ApiResult<Self> {
        Ok(Self {
            http: build_client()?,
            endpoint: endpoint.to_string(),
            authorization: authorization(token),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: Value,
    ) -> ApiResult<T> {
        let query = query.replace("%APP%", APP_FIELDS);
        tracing::debug!(%operation, endpoint = %self.endpoint, "graphql request");

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.authorization)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await
            .map_err(|e| transport_error(operation, &e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(operation, &e))?;

        decode(operation, status, &body)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
    #[serde(default)]
    extensions: Option<ErrorExtensions>,
}

#[derive(Debug, Deserialize)]
struct ErrorExtensions {
    code: Option<String>,
}

/// Decode a GraphQL HTTP response body into `T` or a classified error.
fn decode<T: DeserializeOwned>(
    operation: &str,
    status: reqwest::StatusCode,
    body: &str,
) -> ApiResult<T> {
    let parsed: GraphqlResponse<T> = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !status.is_success() => return Err(status_error(operation, status, body)),
        Err(e) => {
            return Err(ApiError::Remote(format!(
                "{operation}: invalid response: {e}"
            )));
        }
    };

    if !parsed.errors.is_empty() {
        return Err(classify(operation, &parsed.errors));
    }
    if !status.is_success() {
        return Err(status_error(operation, status, body));
    }
    parsed
        .data
        .ok_or_else(|| ApiError::Remote(format!("{operation}: response contained no data")))
}

fn classify(operation: &str, errors: &[GraphqlError]) -> ApiError {
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    let not_found = errors.iter().any(|e| {
        e.extensions
            .as_ref()
            .and_then(|x| x.code.as_deref())
            .is_some_and(|c| c == "NOT_FOUND")
            || e.message.contains("Could not find")
    });
    tracing::debug!(%operation, not_found, %message, "graphql errors");
    if not_found {
        ApiError::NotFound(message)
    } else {
        ApiError::Remote(message)
    }
}

// ── Response shapes ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct AppData {
    app: Option<AppRef>,
}

#[derive(Debug, Deserialize)]
struct AppsData {
    apps: AppNodes,
}

#[derive(Debug, Deserialize)]
struct AppNodes {
    nodes: Vec<AppRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAppData {
    create_app: CreatedApp,
}

#[derive(Debug, Deserialize)]
struct CreatedApp {
    app: AppRef,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddOnData {
    add_on: Option<AddOn>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAddOnData {
    create_add_on: CreatedAddOn,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedAddOn {
    add_on: AddOn,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTokenData {
    create_limited_access_token: CreatedToken,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedToken {
    limited_access_token: TokenValue,
}

#[derive(Debug, Deserialize)]
struct TokenValue {
    token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NearestRegionData {
    nearest_region: RegionCode,
}

#[derive(Debug, Deserialize)]
struct RegionCode {
    code: String,
}

// ── Port implementations ──────────────────────────────────────────────────────

impl AppDirectory for GraphqlClient {
    async fn get_app(&self, name: &str) -> ApiResult<AppRef> {
        let data: AppData = self
            .execute("GetApp", GET_APP, json!({ "name": name }))
            .await?;
        data.app
            .ok_or_else(|| ApiError::NotFound(format!("app {name}")))
    }

    async fn apps_by_role(&self, role: &str, organization_id: &str) -> ApiResult<Vec<AppRef>> {
        let data: AppsData = self
            .execute(
                "GetAppsByRole",
                GET_APPS_BY_ROLE,
                json!({ "role": role, "organizationId": organization_id }),
            )
            .await?;
        Ok(data.apps.nodes)
    }

    async fn create_app(&self, input: &CreateAppInput) -> ApiResult<AppRef> {
        let data: CreateAppData = self
            .execute(
                "CreateApp",
                CREATE_APP,
                json!({ "input": {
                    "organizationId": input.organization_id,
                    "appRoleId": input.role_id,
                    "name": input.name,
                    "machines": input.machines,
                } }),
            )
            .await?;
        Ok(data.create_app.app)
    }
}

impl AddOnDirectory for GraphqlClient {
    async fn get_addon(&self, name: &str) -> ApiResult<AddOn> {
        let data: AddOnData = self
            .execute("GetAddOn", GET_ADD_ON, json!({ "name": name }))
            .await?;
        data.add_on
            .ok_or_else(|| ApiError::NotFound(format!("add-on {name}")))
    }

    async fn create_addon(&self, input: &CreateAddOnInput) -> ApiResult<AddOn> {
        let data: CreateAddOnData = self
            .execute(
                "CreateAddOn",
                CREATE_ADD_ON,
                json!({ "input": {
                    "organizationId": input.organization_id,
                    "name": input.name,
                    "appId": input.app_id,
                    "type": input.addon_type.as_str(),
                } }),
            )
            .await?;
        Ok(data.create_add_on.add_on)
    }
}

impl TokenIssuer for GraphqlClient {
    async fn create_limited_access_token(&self, request: &AccessTokenRequest) -> ApiResult<String> {
        let data: CreateTokenData = self
            .execute(
                "CreateLimitedAccessToken",
                CREATE_LIMITED_ACCESS_TOKEN,
                json!({
                    "name": request.name,
                    "organizationId": request.organization_id,
                    "profile": request.profile,
                    "profileParams": request.profile_params,
                    "expiry": request.expiry,
                }),
            )
            .await?;
        Ok(data.create_limited_access_token.limited_access_token.token)
    }
}

impl SecretStore for GraphqlClient {
    async fn set_secrets(&self, app_id: &str, secrets: &[SecretInput]) -> ApiResult<()> {
        let secrets: Vec<Value> = secrets
            .iter()
            .map(|s| json!({ "key": s.key, "value": s.value }))
            .collect();
        let _: Value = self
            .execute(
                "SetSecrets",
                SET_SECRETS,
                json!({ "input": { "appId": app_id, "secrets": secrets } }),
            )
            .await?;
        Ok(())
    }
}

impl RegionLocator for GraphqlClient {
    async fn nearest_region(&self) -> ApiResult<String> {
        let data: NearestRegionData = self
            .execute("NearestRegion", NEAREST_REGION, json!({}))
            .await?;
        Ok(data.nearest_region.code)
    }
}
