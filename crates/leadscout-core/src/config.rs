use std::path::PathBuf;
use std::str::FromStr;

use crate::app_config::{AppConfig, Scheme};
use crate::ConfigError;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but cannot be parsed, or if
/// a min/max pair is inverted.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_num = |var: &str, default: &str| -> Result<u64, ConfigError> {
        parse_value::<u64>(var, &or_default(var, default))
    };

    let parse_width = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let width = parse_value::<usize>(var, &or_default(var, default))?;
        if width == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(width)
    };

    let root_domain = or_default("LEADSCOUT_ROOT_DOMAIN", "lodgify.com")
        .trim()
        .trim_start_matches('.')
        .to_ascii_lowercase();
    if root_domain.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADSCOUT_ROOT_DOMAIN".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let scheme = parse_scheme(&or_default("LEADSCOUT_SCHEME", "https"))?;
    let data_dir = PathBuf::from(or_default("LEADSCOUT_DATA_DIR", "./jsons"));
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");
    let user_agent = or_default("LEADSCOUT_USER_AGENT", DEFAULT_USER_AGENT);

    let verify_timeout_ms = parse_num("LEADSCOUT_VERIFY_TIMEOUT_MS", "5000")?;
    let fetch_timeout_ms = parse_num("LEADSCOUT_FETCH_TIMEOUT_MS", "10000")?;
    let verify_concurrency = parse_width("LEADSCOUT_VERIFY_CONCURRENCY", "10")?;
    let scrape_concurrency = parse_width("LEADSCOUT_SCRAPE_CONCURRENCY", "5")?;
    let scrape_limit = parse_value::<usize>(
        "LEADSCOUT_SCRAPE_LIMIT",
        &or_default("LEADSCOUT_SCRAPE_LIMIT", "100"),
    )?;

    let throttle_min_ms = parse_num("LEADSCOUT_THROTTLE_MIN_MS", "1000")?;
    let throttle_max_ms = parse_num("LEADSCOUT_THROTTLE_MAX_MS", "3000")?;
    check_range("LEADSCOUT_THROTTLE_MAX_MS", throttle_min_ms, throttle_max_ms)?;

    let discovery_target = parse_value::<usize>(
        "LEADSCOUT_DISCOVERY_TARGET",
        &or_default("LEADSCOUT_DISCOVERY_TARGET", "100"),
    )?;

    let enrich_limit = parse_value::<usize>(
        "LEADSCOUT_ENRICH_LIMIT",
        &or_default("LEADSCOUT_ENRICH_LIMIT", "5"),
    )?;
    let enrich_pause_min_ms = parse_num("LEADSCOUT_ENRICH_PAUSE_MIN_MS", "2000")?;
    let enrich_pause_max_ms = parse_num("LEADSCOUT_ENRICH_PAUSE_MAX_MS", "5000")?;
    check_range(
        "LEADSCOUT_ENRICH_PAUSE_MAX_MS",
        enrich_pause_min_ms,
        enrich_pause_max_ms,
    )?;

    Ok(AppConfig {
        root_domain,
        scheme,
        data_dir,
        log_level,
        user_agent,
        verify_timeout_ms,
        fetch_timeout_ms,
        verify_concurrency,
        scrape_concurrency,
        scrape_limit,
        throttle_min_ms,
        throttle_max_ms,
        discovery_target,
        enrich_limit,
        enrich_pause_min_ms,
        enrich_pause_max_ms,
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn check_range(max_var: &str, min: u64, max: u64) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidEnvVar {
            var: max_var.to_string(),
            reason: format!("maximum {max} is below minimum {min}"),
        });
    }
    Ok(())
}

/// Parse a string into a `Scheme` variant.
///
/// Returns an error for anything other than `http` or `https`.
fn parse_scheme(s: &str) -> Result<Scheme, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "http" => Ok(Scheme::Http),
        "https" => Ok(Scheme::Https),
        other => Err(ConfigError::InvalidEnvVar {
            var: "LEADSCOUT_SCHEME".to_string(),
            reason: format!("unknown scheme \"{other}\"; expected http or https"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
