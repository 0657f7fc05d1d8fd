//! Conditional routing: pick the next node by inspecting the state.

use std::sync::Arc;

use crate::state::WorkflowState;

/// Router attached to a node with `Workflow::add_conditional_edge`.
///
/// Called after the node's patch has been merged, with a read-only view of
/// the updated state, and returns the name of the next node (or `END`).
/// Routers are infallible: a router that cannot decide must still name
/// something, and naming a missing node fails the run at lookup time with
/// the same error a bad static edge would.
pub type RouterFn = Arc<dyn Fn(&WorkflowState) -> String + Send + Sync>;
