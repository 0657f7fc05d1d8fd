//! Graph node trait: one named unit of work in a workflow.
//!
//! Receives an owned snapshot of the workflow state and returns a patch.
//! The runner merges the patch by shallow key overwrite; a node never sees
//! or mutates the running state directly.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::state::{StatePatch, WorkflowState};

/// One step in a workflow: state snapshot in, patch out.
///
/// Nodes are registered under a name with `Workflow::add_node`; the name in
/// the workflow map is the node's identity. A node must be a pure function of
/// its snapshot (logging side effects are fine, the runner ignores them);
/// mutating the snapshot has no effect on the run because the runner clones
/// the state before every call.
///
/// **Interaction**: stored as `Arc<dyn Node>` in `Workflow` and
/// `ToolRegistry`; called by the run loop, one node at a time, each awaited
/// to completion before its patch is merged.
#[async_trait]
pub trait Node: Send + Sync {
    /// One step: snapshot in, patch out.
    ///
    /// Return an empty patch to leave the state untouched. An error stops
    /// the run; it is recorded in the trace and never retried.
    async fn run(&self, state: WorkflowState) -> Result<StatePatch, NodeError>;
}

/// Node backed by a plain closure, for tests, examples, and ad-hoc graphs.
///
/// Wraps `Fn(WorkflowState) -> Result<StatePatch, NodeError>` so callers do
/// not have to declare a struct per step:
/// `Arc::new(FnNode::new(|state| Ok(StatePatch::new())))`.
pub struct FnNode<F> {
    f: F,
}

impl<F> FnNode<F>
where
    F: Fn(WorkflowState) -> Result<StatePatch, NodeError> + Send + Sync,
{
    /// Creates a node from a closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F> Node for FnNode<F>
where
    F: Fn(WorkflowState) -> Result<StatePatch, NodeError> + Send + Sync,
{
    async fn run(&self, state: WorkflowState) -> Result<StatePatch, NodeError> {
        (self.f)(state)
    }
}
