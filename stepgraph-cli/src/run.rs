use std::path::Path;

use serde_json::{json, Value};
use stepgraph::{
    build_pipeline, register_tools, GraphSpec, RunFailure, RunReport, ToolRegistry, Workflow,
    WorkflowState,
};

/// Errors surfaced by the CLI entry points.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Runs the built-in data-quality pipeline over `data`.
///
/// `threshold` is the number of anomalies a finished run may still carry.
pub async fn run_quality(data: &[i64], threshold: i64) -> Result<RunReport, RunFailure> {
    let mut state = WorkflowState::new();
    state.insert("data".to_string(), json!(data));
    state.insert("threshold".to_string(), json!(threshold));
    build_pipeline().run(state).await
}

/// Loads a graph description and an initial state from JSON files.
///
/// The graph is assembled against the demo tool registry, so its node and
/// router names must be ones `register_tools` provides.
pub fn load_run_inputs(
    graph_path: &Path,
    state_path: &Path,
) -> Result<(Workflow, WorkflowState), Error> {
    let spec: GraphSpec = serde_json::from_str(&std::fs::read_to_string(graph_path)?)?;

    let registry = ToolRegistry::new();
    register_tools(&registry);
    let workflow = spec.assemble(&registry)?;

    let state = load_state(state_path)?;
    Ok((workflow, state))
}

pub(crate) fn load_state(path: &Path) -> Result<WorkflowState, Error> {
    let value: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(format!("state file {} must contain a JSON object", path.display()).into()),
    }
}
