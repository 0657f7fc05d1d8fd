//! Profile node: summarize the incoming data array.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::NodeError;
use crate::graph::Node;
use crate::state::{StatePatch, WorkflowState};

/// Profiles `data`: counts the items and keeps a two-item preview.
///
/// Writes `{"profile": {"count": N, "preview": [first two items]}}`.
/// Missing or non-array `data` profiles as empty.
///
/// **Interaction**: entry node of the quality pipeline; its unconditional
/// edge leads to `identify_anomalies`.
#[derive(Default)]
pub struct ProfileDataNode;

#[async_trait]
impl Node for ProfileDataNode {
    async fn run(&self, state: WorkflowState) -> Result<StatePatch, NodeError> {
        let empty = Vec::new();
        let data = state.get("data").and_then(Value::as_array).unwrap_or(&empty);
        let preview: Vec<Value> = data.iter().take(2).cloned().collect();
        let mut patch = StatePatch::new();
        patch.insert(
            "profile".to_string(),
            json!({ "count": data.len(), "preview": preview }),
        );
        Ok(patch)
    }
}
