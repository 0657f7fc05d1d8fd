//! Workflow: named nodes plus edges and routers, built by chaining.
//!
//! Add nodes with `add_node`, set the entry with `set_entry_point`, wire
//! transitions with `add_edge(from, to)` and `add_conditional_edge(source,
//! router)` using `END` for graph exit, then call `run` with an initial
//! state. There is no separate compile step: structural problems (missing
//! entry, edge to an unknown node) surface when a run actually reaches them.

use std::collections::HashMap;
use std::sync::Arc;

use crate::graph::node::Node;
use crate::graph::router::RouterFn;
use crate::state::WorkflowState;

/// Sentinel for graph exit: a transition to `END` finishes the run.
///
/// Usable as the `to` of `add_edge` and as a router return value. `END` is
/// never looked up as a node and never executed, so a node registered under
/// this name is unreachable.
pub const END: &str = "__END__";

/// Workflow graph: named nodes, unconditional edges, conditional routers.
///
/// Each node has at most one outgoing edge and at most one router; when both
/// are present the router wins. Registration is last-write-wins across the
/// board: re-adding a node, edge, or router under the same name silently
/// replaces the previous one.
///
/// **Interaction**: stores `Arc<dyn Node>`; `run` (see `runner`) walks the
/// graph from the entry point and returns a `RunReport`.
#[derive(Default)]
pub struct Workflow {
    pub(super) nodes: HashMap<String, Arc<dyn Node>>,
    /// Unconditional transitions (from → to). Consulted only when `from` has no router.
    pub(super) edges: HashMap<String, String>,
    /// Routers by source node. A router takes priority over an edge from the same node.
    pub(super) routers: HashMap<String, RouterFn>,
    pub(super) entry: Option<String>,
}

impl Workflow {
    /// Creates an empty workflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under `name`. Replaces if same name.
    ///
    /// Returns `&mut Self` for method chaining. The name is the node's
    /// identity; edges and routers refer to it by this string.
    pub fn add_node(&mut self, name: impl Into<String>, node: Arc<dyn Node>) -> &mut Self {
        self.nodes.insert(name.into(), node);
        self
    }

    /// Sets the node the run starts from. The last call wins.
    ///
    /// The name is not checked here; a run with an unset or unknown entry
    /// fails at start time.
    pub fn set_entry_point(&mut self, name: impl Into<String>) -> &mut Self {
        self.entry = Some(name.into());
        self
    }

    /// Adds an unconditional edge from `from` to `to`.
    ///
    /// Use `END` as `to` for graph exit. One edge per source node; a second
    /// edge from the same node replaces the first. Ignored at run time when
    /// `from` also has a router.
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.insert(from.into(), to.into());
        self
    }

    /// Attaches a router to `source`: after the node runs, the router picks
    /// the next node from the updated state.
    ///
    /// The router's return value is used verbatim as a node name (`END` to
    /// finish). One router per source node, last one wins; it shadows any
    /// unconditional edge from the same node.
    pub fn add_conditional_edge(&mut self, source: impl Into<String>, router: RouterFn) -> &mut Self {
        self.routers.insert(source.into(), router);
        self
    }

    /// Picks the next node after `name` against the updated `state`:
    /// router first, then edge, else `None` (dead end).
    pub(super) fn next_after(&self, name: &str, state: &WorkflowState) -> Option<NextHop> {
        if let Some(router) = self.routers.get(name) {
            return Some(NextHop::Routed(router(state)));
        }
        self.edges
            .get(name)
            .map(|to| NextHop::Static(to.clone()))
    }
}

/// Outcome of a transition lookup, tagged with how it was chosen so the run
/// trace can tell routed hops from static ones.
pub(super) enum NextHop {
    /// Picked by a router.
    Routed(String),
    /// Followed an unconditional edge.
    Static(String),
}
