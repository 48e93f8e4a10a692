//! Route table subsystem.
//!
//! # Data Flow
//! ```text
//! Route Declaration (at startup):
//!     RouteEntry[] (path, name, eager/deferred component)
//!     → RouteTable (declaration order preserved)
//!     → validate() (pattern syntax, name uniqueness)
//!     → handed to the external routing engine
//!
//! Navigation (owned by the external router):
//!     path → first matching pattern wins → component resolved
//!     → deferred loaders invoked on first visit, cached by the router
//! ```
//!
//! # Design Decisions
//! - The table is pure declaration: no matching, no redirects, no guards
//! - Deferred loaders run only when the router first visits the route
//! - Name uniqueness is validated here; pattern uniqueness belongs to the
//!   router's matching rules
//! - Validation reports all errors, not just the first

pub mod entry;
pub mod pattern;
pub mod table;

pub use entry::{ComponentLoader, ComponentSource, LoadError, RouteEntry};
pub use pattern::{PathPattern, PatternError};
pub use table::{RouteError, RouteTable};
