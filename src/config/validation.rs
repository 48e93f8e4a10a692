//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base origin is a bare http/https origin
//! - Validate value ranges (timeout > 0, known log level)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FrontendConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::FrontendConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("api.base_origin '{origin}' is not a valid URL: {reason}")]
    BaseOriginUnparsable { origin: String, reason: String },

    #[error("api.base_origin '{origin}' must use http or https")]
    BaseOriginScheme { origin: String },

    #[error("api.base_origin '{origin}' must be an origin only (no path, query, or fragment)")]
    BaseOriginNotBare { origin: String },

    #[error("api.timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("router.base_path '{path}' must start with '/'")]
    BasePathRelative { path: String },

    #[error("observability.log_level '{level}' is not one of trace/debug/info/warn/error")]
    UnknownLogLevel { level: String },
}

/// Check a deserialized configuration for semantic problems.
pub fn validate_config(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let origin = &config.api.base_origin;
    match Url::parse(origin) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::BaseOriginScheme {
                    origin: origin.clone(),
                });
            }
            if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
                errors.push(ValidationError::BaseOriginNotBare {
                    origin: origin.clone(),
                });
            }
        }
        Err(e) => errors.push(ValidationError::BaseOriginUnparsable {
            origin: origin.clone(),
            reason: e.to_string(),
        }),
    }

    if config.api.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if !config.router.base_path.starts_with('/') {
        errors.push(ValidationError::BasePathRelative {
            path: config.router.base_path.clone(),
        });
    }

    let level = config.observability.log_level.as_str();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ValidationError::UnknownLogLevel {
            level: level.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
