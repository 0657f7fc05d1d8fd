//! Builds a two-node loop by hand and lets a router end it.
//!
//! `increment` bumps a counter with a hand-written [`Node`] impl, `report`
//! watches it go by, and a conditional edge on `report` loops back until the
//! counter reaches 3.
//!
//! Run with: `cargo run -p stepgraph-examples --example counter_loop`

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use stepgraph::{FnNode, Node, NodeError, StatePatch, Workflow, WorkflowState, END};

struct Increment;

#[async_trait]
impl Node for Increment {
    async fn run(&self, state: WorkflowState) -> Result<StatePatch, NodeError> {
        let count = state.get("count").and_then(Value::as_i64).unwrap_or(0);
        let mut patch = StatePatch::new();
        patch.insert("count".to_string(), json!(count + 1));
        Ok(patch)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut workflow = Workflow::new();
    workflow
        .add_node("increment", Arc::new(Increment))
        .add_node("report", Arc::new(FnNode::new(|_| Ok(StatePatch::new()))))
        .set_entry_point("increment")
        .add_edge("increment", "report")
        .add_conditional_edge(
            "report",
            Arc::new(|state: &WorkflowState| {
                let count = state.get("count").and_then(Value::as_i64).unwrap_or(0);
                if count >= 3 {
                    END.to_string()
                } else {
                    "increment".to_string()
                }
            }),
        );

    let report = workflow.run(WorkflowState::new()).await?;

    for line in &report.trace {
        println!("{}", line);
    }
    println!("---");
    println!("count: {}", report.final_state["count"]);

    Ok(())
}
