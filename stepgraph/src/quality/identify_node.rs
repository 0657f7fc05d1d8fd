//! Identify node: flag anomalous values under the current rule set.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::NodeError;
use crate::graph::Node;
use crate::state::{StatePatch, WorkflowState};

/// Flags integer items of `data` greater than 100 as anomalies, unless a
/// rule in `rules` sets `allow_gt_100`. Writes `{"anomalies": [..]}`.
///
/// Non-integer items are never anomalous. Runs once after profiling and
/// again after each `apply_rules` pass, re-reading `rules` each time, which
/// is what makes the generate → apply loop converge.
#[derive(Default)]
pub struct IdentifyAnomaliesNode;

#[async_trait]
impl Node for IdentifyAnomaliesNode {
    async fn run(&self, state: WorkflowState) -> Result<StatePatch, NodeError> {
        let empty = Vec::new();
        let data = state.get("data").and_then(Value::as_array).unwrap_or(&empty);
        let rules = state
            .get("rules")
            .and_then(Value::as_array)
            .unwrap_or(&empty);
        let allow_gt_100 = rules.iter().any(|rule| {
            rule.get("allow_gt_100")
                .and_then(Value::as_bool)
                .unwrap_or(false)
        });

        let anomalies: Vec<Value> = data
            .iter()
            .filter(|item| !allow_gt_100 && item.as_i64().map_or(false, |n| n > 100))
            .cloned()
            .collect();

        let mut patch = StatePatch::new();
        patch.insert("anomalies".to_string(), Value::Array(anomalies));
        Ok(patch)
    }
}
