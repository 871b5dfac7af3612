use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_environment_uses_defaults() {
    let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_port_and_addr_fall_back_to_defaults() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn overrides_are_parsed() {
    let cfg = SiteConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("PUBLIC_DIR", " /srv/site "),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/site"));
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "::1"), ("PORT", "3001")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3001");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn invalid_port_is_an_error() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = SiteConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort { raw: raw.to_owned() });
    }
}

#[test]
fn invalid_bind_addr_is_an_error() {
    let err = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr { raw: "localhost".to_owned() });
    assert!(err.to_string().contains("BIND_ADDR"));
}

#[test]
fn blank_public_dir_is_an_error() {
    let err = SiteConfig::from_lookup(lookup(&[("PUBLIC_DIR", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyPublicDir);
}

// =============================================================
// Process environment
// =============================================================

#[test]
fn from_env_reads_process_variables() {
    unsafe {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("PUBLIC_DIR");
        std::env::set_var("PORT", "4321");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4321);

    unsafe { std::env::remove_var("PORT") };
}
