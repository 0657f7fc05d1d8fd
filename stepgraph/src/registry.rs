//! Name registry: resolves textual names to node and router callables.
//!
//! Graph-construction glue (the HTTP layer, the CLI) builds workflows from
//! declarative descriptions that refer to steps by name; the registry is the
//! table those names resolve through. The engine itself never touches it.
//! Constructed explicitly and injected by reference, so tests and binaries
//! each own their table instead of sharing process-wide state.

use std::sync::Arc;

use dashmap::DashMap;

use crate::graph::{Node, RouterFn};

/// Name → callable tables for nodes and routers.
///
/// Registration is last-write-wins, like the workflow builder. All methods
/// take `&self`; the registry can be shared behind an `Arc` and populated or
/// queried concurrently.
///
/// **Interaction**: populated at startup (e.g. `quality::register_tools`);
/// consumed by `GraphSpec::assemble`, which resolves each name or fails with
/// a `BuildError` before anything runs.
#[derive(Default)]
pub struct ToolRegistry {
    nodes: DashMap<String, Arc<dyn Node>>,
    routers: DashMap<String, RouterFn>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node transform under `name`. Replaces if same name.
    pub fn register_node(&self, name: impl Into<String>, node: Arc<dyn Node>) {
        self.nodes.insert(name.into(), node);
    }

    /// Registers a router under `name`. Replaces if same name.
    pub fn register_router(&self, name: impl Into<String>, router: RouterFn) {
        self.routers.insert(name.into(), router);
    }

    /// Retrieves a node by name.
    pub fn node(&self, name: &str) -> Option<Arc<dyn Node>> {
        self.nodes.get(name).map(|entry| entry.value().clone())
    }

    /// Retrieves a router by name.
    pub fn router(&self, name: &str) -> Option<RouterFn> {
        self.routers.get(name).map(|entry| entry.value().clone())
    }

    /// Names of all registered nodes, in no particular order.
    pub fn node_names(&self) -> Vec<String> {
        self.nodes.iter().map(|entry| entry.key().clone()).collect()
    }
}
