//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the console
//! shell. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the console frontend.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FrontendConfig {
    /// API client settings (base origin, timeout).
    pub api: ApiConfig,

    /// Settings consumed by the external routing engine.
    pub router: RouterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// API client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Network origin all relative request paths are joined onto
    /// (e.g. "http://localhost:8000"). Scheme and authority only.
    pub base_origin: String,

    /// Per-request timeout in milliseconds. A request with no response
    /// within this bound fails with a timeout error.
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_origin: "http://localhost:8000".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Settings handed to the external routing engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Base path the application is served under ("/" unless the deployment
    /// mounts the console below a prefix).
    pub base_path: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
