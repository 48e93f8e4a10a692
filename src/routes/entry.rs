//! Route entries and component sources.
//!
//! # Responsibilities
//! - Pair a path pattern and name with a view component
//! - Model eager components (resolved at startup) and deferred ones
//!   (loaded when the route is first visited)
//!
//! # Design Decisions
//! - A deferred loader is a zero-argument closure returning a boxed future;
//!   invoking it is the router's decision, never this crate's
//! - The resolved component is cached by the router, not here

use futures_util::future::BoxFuture;

/// Error type for deferred component loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to load component chunk '{chunk}': {reason}")]
pub struct LoadError {
    pub chunk: String,
    pub reason: String,
}

/// Zero-argument operation producing a component on first navigation.
pub type ComponentLoader<C> =
    Box<dyn Fn() -> BoxFuture<'static, Result<C, LoadError>> + Send + Sync>;

/// Where a route's component comes from.
pub enum ComponentSource<C> {
    /// Resolved at startup, part of the main chunk.
    Eager(C),
    /// Fetched on demand the first time the route is visited.
    Deferred(ComponentLoader<C>),
}

impl<C> ComponentSource<C> {
    /// True if resolving this source requires running a loader.
    pub fn is_deferred(&self) -> bool {
        matches!(self, ComponentSource::Deferred(_))
    }
}

impl<C> std::fmt::Debug for ComponentSource<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentSource::Eager(_) => f.write_str("Eager(..)"),
            ComponentSource::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// One row of the route table.
#[derive(Debug)]
pub struct RouteEntry<C> {
    path: &'static str,
    name: &'static str,
    component: ComponentSource<C>,
}

impl<C> RouteEntry<C> {
    /// Declare a route whose component is resolved at startup.
    pub fn eager(path: &'static str, name: &'static str, component: C) -> Self {
        Self {
            path,
            name,
            component: ComponentSource::Eager(component),
        }
    }

    /// Declare a route whose component is loaded on first visit.
    pub fn deferred<F>(path: &'static str, name: &'static str, loader: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<C, LoadError>> + Send + Sync + 'static,
    {
        Self {
            path,
            name,
            component: ComponentSource::Deferred(Box::new(loader)),
        }
    }

    /// The declared path pattern, exactly as written.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Route identifier, unique across the table.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The component source consumed by the router.
    pub fn component(&self) -> &ComponentSource<C> {
        &self.component
    }
}
