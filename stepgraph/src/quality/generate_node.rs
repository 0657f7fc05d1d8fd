//! Generate node: extend the rule set in response to anomalies.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::NodeError;
use crate::graph::Node;
use crate::state::{StatePatch, WorkflowState};

/// Appends an `{"allow_gt_100": true}` rule when `anomalies` is non-empty,
/// and writes the accumulated set back as `{"rules": [..]}`.
///
/// With no anomalies the patch still carries the unchanged rule set. Mock
/// rule generation: one fixed rule shape, appended once per loop pass.
#[derive(Default)]
pub struct GenerateRulesNode;

#[async_trait]
impl Node for GenerateRulesNode {
    async fn run(&self, state: WorkflowState) -> Result<StatePatch, NodeError> {
        let has_anomalies = state
            .get("anomalies")
            .and_then(Value::as_array)
            .map_or(false, |anomalies| !anomalies.is_empty());
        let mut rules = state
            .get("rules")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if has_anomalies {
            rules.push(json!({ "allow_gt_100": true }));
        }
        let mut patch = StatePatch::new();
        patch.insert("rules".to_string(), Value::Array(rules));
        Ok(patch)
    }
}
