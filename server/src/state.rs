//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for every proxied request and the
//! upstream base URL. Clone is cheap: the client is internally Arc-wrapped.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend base URL, without trailing `/`.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build the shared HTTP client from config.
    ///
    /// # Errors
    ///
    /// Returns the reqwest error if the client cannot be constructed.
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { http: builder.build()?, upstream: Arc::from(config.api_upstream.as_str()) })
    }
}
