//! Application view handles and route declarations.
//!
//! Views are opaque handles; rendering and mounting live in the host shell.
//! The home view ships in the main chunk, everything else is deferred so its
//! chunk is only fetched the first time the route is visited.

use std::sync::Arc;

use crate::routes::{LoadError, RouteEntry, RouteTable};

/// Handle to one UI view: its route-facing name and the code chunk the host
/// shell fetches to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub name: &'static str,
    pub chunk: &'static str,
}

impl View {
    const fn new(name: &'static str, chunk: &'static str) -> Self {
        Self { name, chunk }
    }
}

fn deferred(
    path: &'static str,
    name: &'static str,
    chunk: &'static str,
) -> RouteEntry<Arc<View>> {
    RouteEntry::deferred(path, name, move || {
        // Chunk delivery is the host shell's concern; resolving the handle
        // here is what hands it the chunk name on first visit.
        Box::pin(async move { Ok::<_, LoadError>(Arc::new(View::new(name, chunk))) })
    })
}

/// The console's route table, in first-match-wins order.
///
/// `/kb/:id` carries the knowledge-base id to the detail view through its
/// `:id` placeholder; the router extracts the concrete value.
pub fn console_routes() -> RouteTable<Arc<View>> {
    RouteTable::new(vec![
        RouteEntry::eager("/", "home", Arc::new(View::new("home", "main"))),
        deferred("/kb", "kb-list", "kb-list"),
        deferred("/kb/:id", "kb-detail", "kb-detail"),
        deferred("/chat", "chat", "chat"),
        deferred("/about", "about", "about"),
    ])
}
