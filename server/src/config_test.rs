use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM);
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS));
    assert_eq!(cfg.request_timeout, None);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("VARSYNC_API_UPSTREAM", "https://varsync.internal:5000/"),
        ("VARSYNC_UPSTREAM_CONNECT_TIMEOUT_SECS", "3"),
        ("VARSYNC_UPSTREAM_REQUEST_TIMEOUT_SECS", " 900 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream, "https://varsync.internal:5000");
    assert_eq!(cfg.connect_timeout, Duration::from_secs(3));
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(900)));
}

#[test]
fn from_lookup_blank_upstream_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("VARSYNC_API_UPSTREAM", "  ")])).unwrap();
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn from_lookup_invalid_timeout_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("VARSYNC_UPSTREAM_REQUEST_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "VARSYNC_UPSTREAM_REQUEST_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_non_http_upstream() {
    let err = ServerConfig::from_lookup(lookup(&[("VARSYNC_API_UPSTREAM", "ftp://host")])).unwrap_err();
    assert_eq!(err, ConfigError::UpstreamScheme("ftp://host".into()));
}
