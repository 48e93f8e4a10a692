//! Route table declaration and semantic validation.
//!
//! # Responsibilities
//! - Hold route entries in declaration order
//! - Validate pattern syntax and name uniqueness
//!
//! # Design Decisions
//! - Construction is pure declaration and never fails; validation is a
//!   separate pass run once at startup
//! - Declaration order is preserved because the consuming router applies
//!   first-match-wins
//! - Pattern uniqueness is not checked here; the router's matching rules
//!   own that invariant

use std::collections::HashSet;

use crate::routes::entry::RouteEntry;
use crate::routes::pattern::{PathPattern, PatternError};

/// A semantic problem found in a route table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route '{name}': {source}")]
    InvalidPattern {
        name: String,
        source: PatternError,
    },

    #[error("route name '{name}' is declared more than once")]
    DuplicateName { name: String },
}

/// Ordered sequence of route entries consumed by the external router.
#[derive(Debug)]
pub struct RouteTable<C> {
    entries: Vec<RouteEntry<C>>,
}

impl<C> RouteTable<C> {
    /// Declare a table. Entries keep their declaration order.
    pub fn new(entries: Vec<RouteEntry<C>>) -> Self {
        Self { entries }
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry<C>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its unique name.
    pub fn get(&self, name: &str) -> Option<&RouteEntry<C>> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Parsed pattern for every entry, in declaration order.
    ///
    /// Only meaningful after [`validate`](Self::validate) has passed.
    pub fn patterns(&self) -> Result<Vec<PathPattern>, RouteError> {
        self.entries
            .iter()
            .map(|e| {
                PathPattern::parse(e.path()).map_err(|source| RouteError::InvalidPattern {
                    name: e.name().to_string(),
                    source,
                })
            })
            .collect()
    }

    /// Check every pattern parses and every name is unique.
    ///
    /// Reports all problems, not just the first.
    pub fn validate(&self) -> Result<(), Vec<RouteError>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for entry in &self.entries {
            if let Err(source) = PathPattern::parse(entry.path()) {
                errors.push(RouteError::InvalidPattern {
                    name: entry.name().to_string(),
                    source,
                });
            }
            if !seen.insert(entry.name()) {
                errors.push(RouteError::DuplicateName {
                    name: entry.name().to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
