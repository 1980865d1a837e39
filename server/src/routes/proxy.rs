//! Forwarding of `/api/*` calls to the variables backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is an external service. The browser only talks to this host,
//! so the frontend and the API share one origin. Only the six endpoints the
//! frontend uses are forwarded; everything else under `/api` is a 404.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Endpoint names forwarded to the upstream.
pub const PROXIED_ENDPOINTS: [&str; 6] = ["read", "write", "update", "search", "download", "license"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("unknown api endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::UnknownEndpoint(_) => StatusCode::NOT_FOUND,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

pub fn is_proxied_endpoint(endpoint: &str) -> bool {
    PROXIED_ENDPOINTS.contains(&endpoint)
}

/// Upstream URL for `endpoint`, carrying the caller's raw query string.
pub fn upstream_url(base: &str, endpoint: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/api/{endpoint}?{query}"),
        None => format!("{base}/api/{endpoint}"),
    }
}

/// `GET /api/{endpoint}` — forward to the upstream and relay its answer.
pub async fn forward(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response, ProxyError> {
    if !is_proxied_endpoint(&endpoint) {
        return Err(ProxyError::UnknownEndpoint(endpoint));
    }

    let url = upstream_url(&state.upstream, &endpoint, query.as_deref());
    let upstream = state.http.get(&url).send().await.map_err(|e| {
        tracing::warn!(%endpoint, error = %e, "upstream request failed");
        ProxyError::Upstream(e)
    })?;

    let status = upstream.status();
    let headers = upstream.headers().clone();
    let body: Bytes = upstream.bytes().await?;
    tracing::debug!(%endpoint, %status, bytes = body.len(), "forwarded");

    let mut response = (status, body).into_response();
    for name in [header::CONTENT_TYPE, header::CONTENT_DISPOSITION] {
        if let Some(value) = headers.get(&name) {
            response.headers_mut().insert(name, value.clone());
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
