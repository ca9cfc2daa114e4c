use std::env::VarError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Runtime settings for the dashboard window.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dataset opened at startup.
    pub data_path: PathBuf,
    /// Default `env_logger` filter; `RUST_LOG` still wins when set.
    pub log_level: String,
    pub window_size: [f32; 2],
}

/// Load configuration, reading an optional `.env` file first.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric variable does not parse.
pub fn load_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(|key| std::env::var(key))
}

/// Build the configuration from an env-var lookup so tests can feed a map.
fn build_config<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_dimension = |var: &str, default: &str| -> Result<f32, ConfigError> {
        let raw = or_default(var, default);
        let invalid = |reason: String| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        };
        let value = raw.trim().parse::<f32>().map_err(|e| invalid(e.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(invalid(format!("{raw} is not a positive size")));
        }
        Ok(value)
    };

    Ok(Config {
        data_path: PathBuf::from(or_default("SOCIAL_PULSE_DATA", "social_media_engagement.csv")),
        log_level: or_default("SOCIAL_PULSE_LOG_LEVEL", "info"),
        window_size: [
            parse_dimension("SOCIAL_PULSE_WINDOW_WIDTH", "1400")?,
            parse_dimension("SOCIAL_PULSE_WINDOW_HEIGHT", "900")?,
        ],
    })
}
