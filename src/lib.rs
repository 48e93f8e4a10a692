//! Client-side core for the knowledge-base chat console.
//!
//! Two independent, leaf-level pieces of the single-page application shell:
//! a declarative route table consumed by an external routing engine, and a
//! preconfigured HTTP client the rest of the application issues API calls
//! through.
//!
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │             APPLICATION SHELL              │
//!                  │                                            │
//!   Navigation ────┼─▶ external router ──▶ routes::RouteTable   │
//!                  │        │                  (declaration)    │
//!                  │        ▼                                   │
//!                  │   views (eager / deferred loaders)         │
//!                  │                                            │
//!   API call ──────┼─▶ api::ApiClient ──▶ base origin + path    │
//!                  │        │                                   │
//!                  │        ▼                                   │
//!                  │   response interceptor (log + re-fail)     │
//!                  │                                            │
//!                  │  ┌──────────────────────────────────────┐  │
//!                  │  │       Cross-Cutting Concerns         │  │
//!                  │  │  ┌────────┐      ┌───────────────┐   │  │
//!                  │  │  │ config │      │ observability │   │  │
//!                  │  │  └────────┘      └───────────────┘   │  │
//!                  │  └──────────────────────────────────────┘  │
//!                  └────────────────────────────────────────────┘
//! ```
//!
//! Matching, redirects, guards, component mounting, retries, and view
//! rendering all live in external collaborators; this crate only declares
//! configuration and forwards failures.

// Core subsystems
pub mod api;
pub mod routes;
pub mod views;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use api::{ApiClient, ApiError};
pub use config::FrontendConfig;
pub use routes::{ComponentSource, RouteEntry, RouteTable};
pub use views::View;
