use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream, DEFAULT_SEO_API_URL);
    assert_eq!(cfg.timeouts, UpstreamTimeouts { connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS, request_secs: None });
}

#[test]
fn overrides_are_parsed_and_trailing_slash_trimmed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SEO_API_URL", "https://seo.example.test/v1/"),
        ("SEO_API_CONNECT_TIMEOUT_SECS", "3"),
        ("SEO_API_REQUEST_TIMEOUT_SECS", "90"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream, "https://seo.example.test/v1");
    assert_eq!(cfg.timeouts, UpstreamTimeouts { connect_secs: 3, request_secs: Some(90) });
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("SEO_API_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream, DEFAULT_SEO_API_URL);
}

#[test]
fn malformed_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn malformed_timeout_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("SEO_API_REQUEST_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SEO_API_REQUEST_TIMEOUT_SECS", .. }));
}

#[test]
fn non_http_upstream_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("SEO_API_URL", "seo.example.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::NotHttpUrl { var: "SEO_API_URL", .. }));
}
