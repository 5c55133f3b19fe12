//! Shared HTTP plumbing for the platform clients.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::domain::ApiError;

/// Per-request timeout applied by both platform clients.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Build the HTTP client shared by the platform clients.
///
/// # Errors
///
/// Returns `ApiError::Remote` if the TLS backend cannot be initialised.
pub fn build_client() -> Result<Client, ApiError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("logship/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::Remote(format!("building HTTP client: {e}")))
}

/// `Authorization` header value for an access token.
///
/// Macaroon tokens already carry their `FlyV1` scheme; anything else is sent
/// as a bearer token.
#[must_use]
pub fn authorization(token: &str) -> String {
    let token = token.trim();
    if token.starts_with("FlyV1 ") || token.starts_with("Bearer ") {
        token.to_string()
    } else {
        format!("Bearer {token}")
    }
}

/// Map a transport failure to `ApiError::Remote`.
pub fn transport_error(what: &str, err: &reqwest::Error) -> ApiError {
    ApiError::Remote(format!("{what}: {err}"))
}

/// Turn a non-success status into an `ApiError`, passing successes through.
///
/// # Errors
///
/// Returns `ApiError::NotFound` for 404 and `ApiError::Remote` with the
/// response body for any other non-success status.
pub async fn check_status(what: &str, response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(what, status, &body))
}

/// Classify a non-success status.
#[must_use]
pub fn status_error(what: &str, status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound(what.to_string());
    }
    let body = body.trim();
    if body.is_empty() {
        ApiError::Remote(format!("{what}: HTTP {status}"))
    } else {
        ApiError::Remote(format!("{what}: HTTP {status}: {body}"))
    }
}
