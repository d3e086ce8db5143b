use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files, which is useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if env var values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup; no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

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

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let store_dir = PathBuf::from(or_default("REPSCAN_STORE_DIR", "./coletas"));
    let targets_path = PathBuf::from(or_default("REPSCAN_TARGETS_PATH", "./config/targets.yaml"));
    let log_level = or_default("REPSCAN_LOG_LEVEL", "info");

    let wait_timeout_secs = parse_u64("REPSCAN_WAIT_TIMEOUT_SECS", "15")?;
    let settle_delay_ms = parse_u64("REPSCAN_SETTLE_DELAY_MS", "2000")?;
    let browser_headless = parse_bool("REPSCAN_BROWSER_HEADLESS", "true")?;

    if wait_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "REPSCAN_WAIT_TIMEOUT_SECS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(AppConfig {
        store_dir,
        targets_path,
        log_level,
        wait_timeout_secs,
        settle_delay_ms,
        browser_headless,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
