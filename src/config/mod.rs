//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, env override for base origin)
//!     → validation.rs (semantic checks)
//!     → FrontendConfig (validated, immutable)
//!     → read by api/ and the host shell at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; constructed once at startup
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The API base origin is deployment-specific and therefore always
//!   externally supplied (file or `KBCHAT_API_BASE_ORIGIN`), never a
//!   compiled-in production literal

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::ApiConfig;
pub use schema::FrontendConfig;
pub use schema::RouterConfig;
