//! Workflow runner: interprets a `Workflow` against an initial state.
//!
//! Walks from the entry node, one node at a time: clone the state, run the
//! node, merge its patch, pick the next node (router first, then edge). The
//! run stops on the `END` marker, a dead end, a failure, or the step budget.
//! Every run produces an ordered trace of human-readable log lines.

use crate::graph::logging;
use crate::graph::run_error::{EngineError, RunFailure};
use crate::graph::workflow::{NextHop, Workflow, END};
use crate::state::{apply_patch, WorkflowState};

/// Hard ceiling on node executions per run.
///
/// The only guard against cycles whose exit condition never holds. Hitting
/// it is a successful, truncated termination, not an error: the run returns
/// whatever state has accumulated, with a final trace line noting the cut.
pub const MAX_STEPS: usize = 100;

/// Result of a completed run: final state plus the execution trace.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub final_state: WorkflowState,
    /// Log lines in execution order: start, one per node execution, one per
    /// transition, plus the truncation line when the step budget ran out.
    pub trace: Vec<String>,
}

impl Workflow {
    /// Runs the workflow against `initial_state` until `END`, a dead end
    /// (node with no outgoing transition), or `MAX_STEPS` node executions.
    ///
    /// Each node receives an owned clone of the running state and its
    /// returned patch is merged by shallow key overwrite before routing.
    /// Routers see the post-merge state. The caller's moved-in state is
    /// never shared with nodes, so concurrent runs of one `Workflow` (behind
    /// `Arc`) need no locking.
    ///
    /// Fails with `RunFailure` carrying the partial trace when the entry
    /// point is unset, a transition names an unknown node, or a node's
    /// transform returns an error. Failures are never retried.
    pub async fn run(&self, initial_state: WorkflowState) -> Result<RunReport, RunFailure> {
        let entry = match &self.entry {
            Some(name) => name.clone(),
            None => {
                let error = EngineError::EntryPointNotSet;
                logging::log_run_error(&error);
                return Err(RunFailure {
                    trace: Vec::new(),
                    error,
                });
            }
        };

        let mut state = initial_state;
        let mut trace = vec![format!("Starting workflow at {}", entry)];
        logging::log_run_start(&entry);

        let mut current = entry;
        let mut steps = 0usize;
        let mut truncated = false;

        loop {
            if steps >= MAX_STEPS {
                truncated = true;
                break;
            }

            trace.push(format!("Executing node: {}", current));
            logging::log_node_start(&current, steps);
            let node = match self.nodes.get(&current) {
                Some(node) => node.clone(),
                None => {
                    let error = EngineError::NodeNotFound(current);
                    logging::log_run_error(&error);
                    return Err(RunFailure { trace, error });
                }
            };

            let patch = match node.run(state.clone()).await {
                Ok(patch) => patch,
                Err(source) => {
                    trace.push(format!("Error in node {}: {}", current, source));
                    let error = EngineError::NodeFailed {
                        node: current,
                        source,
                    };
                    logging::log_run_error(&error);
                    return Err(RunFailure { trace, error });
                }
            };
            apply_patch(&mut state, patch);
            steps += 1;

            let next = match self.next_after(&current, &state) {
                Some(NextHop::Routed(next)) => {
                    trace.push(format!("Condition evaluated. Next node: {}", next));
                    logging::log_transition(&current, &next, true);
                    Some(next)
                }
                Some(NextHop::Static(next)) => {
                    trace.push(format!("Transitioning to: {}", next));
                    logging::log_transition(&current, &next, false);
                    Some(next)
                }
                None => None,
            };

            match next {
                Some(next) if next != END => current = next,
                _ => break,
            }
        }

        if truncated {
            trace.push("Max steps reached. Terminating.".to_string());
        }
        logging::log_run_complete(steps, truncated);
        Ok(RunReport {
            final_state: state,
            trace,
        })
    }
}
