//! Shared helpers for workflow integration tests.

use std::sync::Arc;

use serde_json::{json, Value};
use stepgraph::{FnNode, Node, StatePatch, WorkflowState};

/// Builds a state from key/value pairs.
pub fn record(entries: &[(&str, Value)]) -> WorkflowState {
    let mut state = WorkflowState::new();
    for (key, value) in entries {
        state.insert((*key).to_string(), value.clone());
    }
    state
}

/// Node returning `{key: state[key] + 1}`.
pub fn increment(key: &'static str) -> Arc<dyn Node> {
    Arc::new(FnNode::new(move |state: WorkflowState| {
        let n = state.get(key).and_then(Value::as_i64).unwrap_or(0);
        let mut patch = StatePatch::new();
        patch.insert(key.to_string(), json!(n + 1));
        Ok(patch)
    }))
}

/// Node returning an empty patch.
pub fn noop() -> Arc<dyn Node> {
    Arc::new(FnNode::new(|_| Ok(StatePatch::new())))
}
