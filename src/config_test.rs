use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "  "), ("PORT", "")])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn accepts_ipv6_host() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "::1")])).unwrap();
    assert_eq!(config.addr().to_string(), "[::1]:3000");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "70000"));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn invalid_host_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(ref v) if v == "localhost"));
    assert_eq!(err.to_string(), "invalid HOST \"localhost\"");
}
