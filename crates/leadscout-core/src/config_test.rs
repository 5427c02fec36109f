use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_scheme_http() {
    assert_eq!(parse_scheme("http").unwrap(), Scheme::Http);
}

#[test]
fn parse_scheme_is_case_insensitive() {
    assert_eq!(parse_scheme("HTTPS").unwrap(), Scheme::Https);
}

#[test]
fn parse_scheme_unknown_fails() {
    let err = parse_scheme("ftp").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "LEADSCOUT_SCHEME"));
}

#[test]
fn build_app_config_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.root_domain, "lodgify.com");
    assert_eq!(cfg.scheme, Scheme::Https);
    assert_eq!(cfg.data_dir, PathBuf::from("./jsons"));
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
    assert_eq!(cfg.verify_timeout_ms, 5000);
    assert_eq!(cfg.fetch_timeout_ms, 10_000);
    assert_eq!(cfg.verify_concurrency, 10);
    assert_eq!(cfg.scrape_concurrency, 5);
    assert_eq!(cfg.scrape_limit, 100);
    assert_eq!(cfg.throttle_min_ms, 1000);
    assert_eq!(cfg.throttle_max_ms, 3000);
    assert_eq!(cfg.discovery_target, 100);
    assert_eq!(cfg.enrich_limit, 5);
    assert_eq!(cfg.enrich_pause_min_ms, 2000);
    assert_eq!(cfg.enrich_pause_max_ms, 5000);
}

#[test]
fn build_app_config_normalizes_root_domain() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_ROOT_DOMAIN", " .Example.COM ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.root_domain, "example.com");
}

#[test]
fn build_app_config_rejects_empty_root_domain() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_ROOT_DOMAIN", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_ROOT_DOMAIN"),
        "expected InvalidEnvVar(LEADSCOUT_ROOT_DOMAIN), got: {result:?}"
    );
}

#[test]
fn build_app_config_fetch_timeout_override() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_FETCH_TIMEOUT_MS", "2500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.fetch_timeout_ms, 2500);
    assert_eq!(cfg.fetch_timeout(), std::time::Duration::from_millis(2500));
}

#[test]
fn build_app_config_fetch_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_FETCH_TIMEOUT_MS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_FETCH_TIMEOUT_MS"),
        "expected InvalidEnvVar(LEADSCOUT_FETCH_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_scrape_concurrency() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_SCRAPE_CONCURRENCY", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_SCRAPE_CONCURRENCY"),
        "expected InvalidEnvVar(LEADSCOUT_SCRAPE_CONCURRENCY), got: {result:?}"
    );
}

#[test]
fn build_app_config_verify_concurrency_override() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_VERIFY_CONCURRENCY", "32");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.verify_concurrency, 32);
}

#[test]
fn build_app_config_rejects_inverted_throttle_range() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_THROTTLE_MIN_MS", "4000");
    map.insert("LEADSCOUT_THROTTLE_MAX_MS", "1000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOUT_THROTTLE_MAX_MS"),
        "expected InvalidEnvVar(LEADSCOUT_THROTTLE_MAX_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_allows_zero_throttle() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_THROTTLE_MIN_MS", "0");
    map.insert("LEADSCOUT_THROTTLE_MAX_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.throttle_min_ms, 0);
    assert_eq!(cfg.throttle_max_ms, 0);
}

#[test]
fn build_app_config_data_dir_drives_sink_paths() {
    let mut map = HashMap::new();
    map.insert("LEADSCOUT_DATA_DIR", "/tmp/leads");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.scraped_json_path(),
        PathBuf::from("/tmp/leads/scraped_data.json")
    );
    assert_eq!(
        cfg.categorized_csv_path(),
        PathBuf::from("/tmp/leads/categorized_by_country.csv")
    );
}
