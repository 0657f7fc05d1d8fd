//! Logging utilities for workflow execution.
//!
//! Structured events for run lifecycle, node execution, and routing
//! decisions. These are operator diagnostics; the user-visible trace that
//! ships with the run result is built separately by the runner.

use crate::graph::run_error::EngineError;

/// Log run start at the entry node.
pub fn log_run_start(entry: &str) {
    #[cfg(feature = "tracing")]
    tracing::info!(entry = entry, "Starting workflow run");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[INFO] Starting workflow run at: {}", entry);
}

/// Log node execution start.
///
/// This should be called when a node starts executing.
pub fn log_node_start(name: &str, step: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(node = name, step = step, "Executing node");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Executing node: {} (step {})", name, step);
}

/// Log the transition chosen after a node; `routed` marks a router decision.
pub fn log_transition(from: &str, next: &str, routed: bool) {
    #[cfg(feature = "tracing")]
    tracing::debug!(from = from, next = next, routed = routed, "Transition");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Transition: {} -> {} (routed: {})", from, next, routed);
}

/// Log run completion; `truncated` marks step-budget exhaustion.
pub fn log_run_complete(steps: usize, truncated: bool) {
    #[cfg(feature = "tracing")]
    tracing::info!(steps = steps, truncated = truncated, "Workflow run complete");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[INFO] Workflow run complete: {} steps (truncated: {})",
        steps, truncated
    );
}

/// Log run failure.
pub fn log_run_error(error: &EngineError) {
    #[cfg(feature = "tracing")]
    tracing::error!(?error, "Workflow run error");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Workflow run error: {:?}", error);
}
