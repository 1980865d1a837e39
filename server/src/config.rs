//! Host server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:5000";
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The upstream URL is not an http(s) URL.
    #[error("VARSYNC_API_UPSTREAM must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the variables backend, without trailing `/`.
    pub api_upstream: String,
    pub connect_timeout: Duration,
    /// Total request timeout. `None` lets slow exports run to completion.
    pub request_timeout: Option<Duration>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `VARSYNC_API_UPSTREAM`: default `http://127.0.0.1:5000`
    /// - `VARSYNC_UPSTREAM_CONNECT_TIMEOUT_SECS`: default 10
    /// - `VARSYNC_UPSTREAM_REQUEST_TIMEOUT_SECS`: no total timeout when unset
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;

        let api_upstream = lookup("VARSYNC_API_UPSTREAM")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned())
            .trim_end_matches('/')
            .to_owned();
        if !(api_upstream.starts_with("http://") || api_upstream.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(api_upstream));
        }

        let connect_secs = parse_or(
            "VARSYNC_UPSTREAM_CONNECT_TIMEOUT_SECS",
            lookup("VARSYNC_UPSTREAM_CONNECT_TIMEOUT_SECS"),
            DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        )?;
        let request_timeout = match lookup("VARSYNC_UPSTREAM_REQUEST_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_value("VARSYNC_UPSTREAM_REQUEST_TIMEOUT_SECS", &raw)?)),
            None => None,
        };

        Ok(Self { port, api_upstream, connect_timeout: Duration::from_secs(connect_secs), request_timeout })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => parse_value(var, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value: raw.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
