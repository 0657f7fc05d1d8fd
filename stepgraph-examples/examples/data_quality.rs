//! Runs the built-in data-quality pipeline over a batch with two outliers.
//!
//! The first pass flags 150 and 200 as anomalies, the rule pass whitelists
//! values over 100, and the second inspection comes back clean.
//!
//! Run with: `cargo run -p stepgraph-examples --example data_quality`

use serde_json::json;
use stepgraph::{build_pipeline, WorkflowState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut initial = WorkflowState::new();
    initial.insert("data".to_string(), json!([10, 50, 150, 200, 30]));
    initial.insert("threshold".to_string(), json!(0));

    let report = build_pipeline().run(initial).await?;

    for line in &report.trace {
        println!("{}", line);
    }
    println!("---");
    println!("{}", serde_json::to_string_pretty(&report.final_state)?);

    Ok(())
}
