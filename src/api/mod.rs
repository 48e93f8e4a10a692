//! API client subsystem.
//!
//! # Data Flow
//! ```text
//! ApiConfig (base origin, timeout)
//!     → client.rs (one reqwest::Client, built once)
//!     → endpoints.rs (typed calls, paths joined onto the base origin)
//!     → dispatch: send → interceptor
//!         success → Response passed through unchanged
//!         failure → one tracing::error! event → original error re-raised
//! ```
//!
//! # Design Decisions
//! - One shared client for the whole process, immutable after construction
//! - Network errors, timeouts, and non-2xx statuses are one failure class
//! - Zero recovery here: no retry, no backoff, no circuit breaking

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{init, shared, ApiClient, ApiError};
