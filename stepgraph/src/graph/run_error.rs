//! Workflow run error types.
//!
//! Used by `Workflow::run`. Structural and execution problems both surface
//! here; graph assembly from a spec has its own `BuildError`.

use thiserror::Error;

use crate::error::NodeError;

/// Why a run could not finish.
///
/// Returned inside `RunFailure` by `Workflow::run`. Step-count exhaustion is
/// not represented here: a truncated run still completes with a report.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `run` was called before `set_entry_point`.
    #[error("entry point not set")]
    EntryPointNotSet,
    /// The entry point, an edge target, or a router's pick names no registered node.
    #[error("node not found: {0}")]
    NodeNotFound(String),
    /// A node's transform returned an error; the run stops at that node.
    #[error("node {node} failed: {source}")]
    NodeFailed {
        node: String,
        #[source]
        source: NodeError,
    },
}

/// A run that stopped before reaching a terminal state.
///
/// Carries the trace accumulated up to the failing step, so callers can show
/// how far the run got. The last trace line identifies the failing node for
/// `NodeNotFound`/`NodeFailed`; the trace is empty for `EntryPointNotSet`.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RunFailure {
    pub trace: Vec<String>,
    #[source]
    pub error: EngineError,
}
