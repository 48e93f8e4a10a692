//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::FrontendConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `api.base_origin`. The origin is a
/// deployment-specific value, so the environment always wins over the file.
pub const BASE_ORIGIN_ENV: &str = "KBCHAT_API_BASE_ORIGIN";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FrontendConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: FrontendConfig = toml::from_str(&content)?;

    if let Ok(origin) = std::env::var(BASE_ORIGIN_ENV) {
        config.api.base_origin = origin;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
