//! REST helpers for the variables backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Callers hand the result to the
//! owning state, which keeps its previous contents on error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Command, Dataset};

/// Endpoint serving the exported spreadsheet.
pub const DOWNLOAD_ENDPOINT: &str = "/api/download";
/// Endpoint serving the license text.
pub const LICENSE_ENDPOINT: &str = "/api/license";

/// Failure modes of a backend request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// The response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Path for a command endpoint.
pub fn command_endpoint(command: Command) -> String {
    format!("/api/{}", command.name())
}

/// Query parameter for a command's optional argument.
///
/// Blank arguments produce no parameter so the request stays parameterless.
pub fn command_query(command: Command, argument: &str) -> Option<(&'static str, String)> {
    let trimmed = argument.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some((command.argument_param(), trimmed.to_owned()))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(endpoint: &str, status: u16) -> ApiError {
    ApiError::Status { endpoint: endpoint.to_owned(), status }
}

#[cfg(feature = "hydrate")]
async fn get(url: &str, query: Option<(&'static str, String)>) -> Result<gloo_net::http::Response, ApiError> {
    let mut request = gloo_net::http::Request::get(url);
    if let Some((key, value)) = query {
        request = request.query([(key, value)]);
    }
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(url, resp.status()));
    }
    Ok(resp)
}

/// Run a command endpoint and decode its JSON array of rows.
///
/// # Errors
///
/// Returns an error if the request fails, the status is not 2xx, or the body
/// is not a JSON array of objects.
pub async fn run_command(command: Command, argument: &str) -> Result<Dataset, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = command_endpoint(command);
        let resp = get(&url, command_query(command, argument)).await?;
        let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        super::types::parse_dataset(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (command, argument);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the exported spreadsheet from `/api/download`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn fetch_download() -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get(DOWNLOAD_ENDPOINT, None).await?;
        resp.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the license text from `/api/license`.
///
/// # Errors
///
/// Returns an error if the request fails or the status is not 2xx.
pub async fn fetch_license() -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = get(LICENSE_ENDPOINT, None).await?;
        resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
