//! Pipeline assembly: tool registration, routing, and the fixed demo graph.

use std::sync::Arc;

use serde_json::Value;

use crate::graph::{Workflow, END};
use crate::registry::ToolRegistry;
use crate::state::WorkflowState;

use super::{ApplyRulesNode, GenerateRulesNode, IdentifyAnomaliesNode, ProfileDataNode};

/// Routing after `identify_anomalies`: end when the anomaly count is within
/// the threshold (state key `threshold`, default 0), else loop into rule
/// generation.
pub fn check_anomalies_loop(state: &WorkflowState) -> String {
    let anomalies = state
        .get("anomalies")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let threshold = state.get("threshold").and_then(Value::as_i64).unwrap_or(0);
    if anomalies as i64 <= threshold {
        END.to_string()
    } else {
        "generate_rules".to_string()
    }
}

/// Registers the pipeline's nodes and router under their wire names:
/// `profile_data`, `identify_anomalies`, `generate_rules`, `apply_rules`,
/// and the router `check_anomalies_loop`.
///
/// Called once at startup by binaries that assemble graphs from `GraphSpec`
/// descriptions.
pub fn register_tools(registry: &ToolRegistry) {
    registry.register_node("profile_data", Arc::new(ProfileDataNode));
    registry.register_node("identify_anomalies", Arc::new(IdentifyAnomaliesNode));
    registry.register_node("generate_rules", Arc::new(GenerateRulesNode));
    registry.register_node("apply_rules", Arc::new(ApplyRulesNode));
    registry.register_router("check_anomalies_loop", Arc::new(check_anomalies_loop));
}

/// Builds the fixed demo graph:
///
/// ```text
/// profile_data → identify_anomalies → (router)
///     anomalies over threshold: generate_rules → apply_rules → identify_anomalies
///     otherwise: END
/// ```
pub fn build_pipeline() -> Workflow {
    let mut workflow = Workflow::new();
    workflow
        .add_node("profile_data", Arc::new(ProfileDataNode))
        .add_node("identify_anomalies", Arc::new(IdentifyAnomaliesNode))
        .add_node("generate_rules", Arc::new(GenerateRulesNode))
        .add_node("apply_rules", Arc::new(ApplyRulesNode))
        .set_entry_point("profile_data")
        .add_edge("profile_data", "identify_anomalies")
        .add_conditional_edge("identify_anomalies", Arc::new(check_anomalies_loop))
        .add_edge("generate_rules", "apply_rules")
        .add_edge("apply_rules", "identify_anomalies");
    workflow
}
