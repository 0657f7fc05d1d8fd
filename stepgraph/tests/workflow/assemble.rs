//! GraphSpec assembly through a ToolRegistry, end to end.

use serde_json::json;
use stepgraph::{register_tools, BuildError, GraphSpec, ToolRegistry};

use crate::common::record;

/// The demo pipeline described as a wire-shaped spec assembles against the
/// registered tools and converges like the hand-built graph.
#[tokio::test]
async fn demo_spec_assembles_and_converges() {
    let registry = ToolRegistry::new();
    register_tools(&registry);

    let spec: GraphSpec = serde_json::from_value(json!({
        "nodes": ["profile_data", "identify_anomalies", "generate_rules", "apply_rules"],
        "entry_point": "profile_data",
        "edges": {
            "profile_data": "identify_anomalies",
            "generate_rules": "apply_rules",
            "apply_rules": "identify_anomalies"
        },
        "conditional_edges": { "identify_anomalies": "check_anomalies_loop" }
    }))
    .unwrap();

    let workflow = spec.assemble(&registry).unwrap();
    let report = workflow
        .run(record(&[("data", json!([10, 50, 150, 200, 30]))]))
        .await
        .unwrap();

    assert_eq!(report.final_state["anomalies"], json!([]));
    assert_eq!(
        report.final_state["rules"].as_array().map(Vec::len),
        Some(1)
    );
}

/// A spec naming a tool outside the registered set fails at build time,
/// before anything runs.
#[test]
fn spec_with_unknown_tool_fails_at_build_time() {
    let registry = ToolRegistry::new();
    register_tools(&registry);

    let spec: GraphSpec = serde_json::from_value(json!({
        "nodes": ["profile_data", "cleanse_data"],
        "entry_point": "profile_data"
    }))
    .unwrap();

    match spec.assemble(&registry) {
        Err(BuildError::NodeNotRegistered(name)) => assert_eq!(name, "cleanse_data"),
        _ => panic!("expected NodeNotRegistered"),
    }
}
