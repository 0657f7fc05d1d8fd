//! Assembles a workflow from a JSON graph description instead of code.
//!
//! The description names its nodes and router as strings; a [`ToolRegistry`]
//! seeded with the demo tools resolves them into a runnable [`Workflow`].
//! This is the same path the server's create endpoint takes.
//!
//! Run with: `cargo run -p stepgraph-examples --example graph_spec`

use serde_json::json;
use stepgraph::{register_tools, GraphSpec, ToolRegistry, WorkflowState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec: GraphSpec = serde_json::from_value(json!({
        "nodes": ["profile_data", "identify_anomalies", "generate_rules", "apply_rules"],
        "entry_point": "profile_data",
        "edges": {
            "profile_data": "identify_anomalies",
            "generate_rules": "apply_rules",
            "apply_rules": "identify_anomalies"
        },
        "conditional_edges": {
            "identify_anomalies": "check_anomalies_loop"
        }
    }))?;

    let registry = ToolRegistry::new();
    register_tools(&registry);
    let workflow = spec.assemble(&registry)?;

    let mut initial = WorkflowState::new();
    initial.insert("data".to_string(), json!([7, 300, 42]));

    let report = workflow.run(initial).await?;

    for line in &report.trace {
        println!("{}", line);
    }
    println!("---");
    println!("{}", serde_json::to_string_pretty(&report.final_state)?);

    Ok(())
}
