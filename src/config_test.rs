use std::collections::HashMap;

use super::*;

const SITE_ADDR: &str = "0.0.0.0:3000";

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

fn site_addr() -> SocketAddr {
    SITE_ADDR.parse().unwrap()
}

#[test]
fn unset_keys_keep_leptos_site_addr() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, None);
    assert_eq!(cfg.bind_addr, None);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.socket_addr(site_addr()), site_addr());
}

#[test]
fn leptos_site_addr_is_followed_when_not_overridden() {
    let cfg = config_from(&[]).unwrap();
    let from_leptos: SocketAddr = "127.0.0.1:8443".parse().unwrap();
    assert_eq!(cfg.socket_addr(from_leptos).to_string(), "127.0.0.1:8443");
}

#[test]
fn reads_port_and_bind_addr() {
    let cfg = config_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")]).unwrap();
    assert_eq!(cfg.socket_addr(site_addr()).to_string(), "127.0.0.1:8080");
}

#[test]
fn port_alone_keeps_site_addr_ip() {
    let cfg = config_from(&[("PORT", "9000")]).unwrap();
    let from_leptos: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    assert_eq!(cfg.socket_addr(from_leptos).to_string(), "127.0.0.1:9000");
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = config_from(&[("BIND_ADDR", "::1"), ("PORT", "4000")]).unwrap();
    assert_eq!(cfg.socket_addr(site_addr()).to_string(), "[::1]:4000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = config_from(&[("PORT", "  "), ("SITE_ROOT", "")]).unwrap();
    assert_eq!(cfg.port, None);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn site_root_is_trimmed() {
    let cfg = config_from(&[("SITE_ROOT", " target/site ")]).unwrap();
    assert_eq!(cfg.site_root.as_deref(), Some("target/site"));
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(
        config_from(&[("PORT", "http")]),
        Err(ConfigError::InvalidPort { value: "http".to_owned() })
    );
}

#[test]
fn rejects_zero_and_out_of_range_ports() {
    assert!(matches!(config_from(&[("PORT", "0")]), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn rejects_hostname_bind_addr() {
    let err = config_from(&[("BIND_ADDR", "localhost")]).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR \"localhost\": expected an IP address");
}
