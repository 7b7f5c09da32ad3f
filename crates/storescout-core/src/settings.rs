//! Process settings loaded from environment variables.
//!
//! These cover file locations and external-service tuning; the user-facing
//! analysis parameters (origin, radius, weights) live in [`crate::Config`].

use std::path::PathBuf;

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct Settings {
    pub config_path: PathBuf,
    pub cache_path: PathBuf,
    pub history_path: PathBuf,
    pub hotlist_path: PathBuf,
    pub brands_path: PathBuf,
    pub overpass_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Courtesy pause between per-store school queries.
    pub inter_request_delay_ms: u64,
}

/// Load settings from process environment variables.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric variable cannot be parsed. All variables
/// are optional and have defaults.
pub fn load_settings() -> Result<Settings, ConfigError> {
    build_settings(|key| std::env::var(key))
}

/// Build settings using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
pub fn build_settings<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let config_path = PathBuf::from(or_default("SCOUT_CONFIG_PATH", "./config.json"));
    let cache_path = PathBuf::from(or_default("SCOUT_CACHE_PATH", "./cache.json"));
    let history_path = PathBuf::from(or_default("SCOUT_HISTORY_PATH", "./history.json"));
    let hotlist_path = PathBuf::from(or_default("SCOUT_HOTLIST_PATH", "./hotlist.json"));
    let brands_path = PathBuf::from(or_default("SCOUT_BRANDS_PATH", "./config/brands.yaml"));

    let overpass_url = or_default(
        "SCOUT_OVERPASS_URL",
        "https://overpass-api.de/api/interpreter",
    );
    let request_timeout_secs = parse_u64("SCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SCOUT_USER_AGENT", "storescout/0.1 (store-scouting)");
    let inter_request_delay_ms = parse_u64("SCOUT_INTER_REQUEST_DELAY_MS", "100")?;

    Ok(Settings {
        config_path,
        cache_path,
        history_path,
        hotlist_path,
        brands_path,
        overpass_url,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
    })
}
