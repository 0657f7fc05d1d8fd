//! Run loop scenarios: the counter loop, routing precedence, state isolation,
//! concurrent runs over one shared workflow.

use std::sync::Arc;

use serde_json::{json, Value};
use stepgraph::{FnNode, StatePatch, Workflow, WorkflowState, END};

use crate::common::{increment, noop, record};

/// The canonical two-node loop: A increments, static edge A→B, router on B
/// loops back to A until count reaches 3.
#[tokio::test]
async fn counter_loop_runs_until_threshold() {
    let mut workflow = Workflow::new();
    workflow
        .add_node("A", increment("count"))
        .add_node("B", noop())
        .set_entry_point("A")
        .add_edge("A", "B")
        .add_conditional_edge(
            "B",
            Arc::new(|state: &WorkflowState| {
                if state.get("count").and_then(Value::as_i64).unwrap_or(0) >= 3 {
                    END.to_string()
                } else {
                    "A".to_string()
                }
            }),
        );

    let report = workflow
        .run(record(&[("count", json!(0))]))
        .await
        .unwrap();

    assert_eq!(report.final_state["count"], json!(3));
    let executed: Vec<&str> = report
        .trace
        .iter()
        .filter_map(|line| line.strip_prefix("Executing node: "))
        .collect();
    assert_eq!(executed, ["A", "B", "A", "B", "A", "B"]);
    assert_eq!(report.trace.len(), 13, "trace: {:#?}", report.trace);
    assert_eq!(report.trace[0], "Starting workflow at A");
    assert_eq!(
        report.trace.last().map(String::as_str),
        Some(format!("Condition evaluated. Next node: {}", END).as_str())
    );
}

/// A node carrying both a router and a static edge follows the router on
/// every pass; the edge target is dead configuration and is never visited.
#[tokio::test]
async fn router_beats_static_edge_on_every_pass() {
    let mut workflow = Workflow::new();
    workflow
        .add_node("hub", increment("visits"))
        .set_entry_point("hub")
        .add_edge("hub", "unregistered_target")
        .add_conditional_edge(
            "hub",
            Arc::new(|state: &WorkflowState| {
                if state["visits"].as_i64() >= Some(2) {
                    END.to_string()
                } else {
                    "hub".to_string()
                }
            }),
        );

    let report = workflow.run(WorkflowState::new()).await.unwrap();
    assert_eq!(report.final_state["visits"], json!(2));
    assert!(report
        .trace
        .iter()
        .all(|line| !line.starts_with("Transitioning to:")));
    assert_eq!(
        report
            .trace
            .iter()
            .filter(|line| line.starts_with("Condition evaluated"))
            .count(),
        2
    );
}

/// Mutating the caller's copy after handing a snapshot to run never reaches
/// the in-flight run.
#[tokio::test]
async fn caller_mutation_after_submit_is_invisible() {
    let mut workflow = Workflow::new();
    workflow
        .add_node(
            "copy",
            Arc::new(FnNode::new(|state: WorkflowState| {
                let mut patch = StatePatch::new();
                patch.insert("seen_keys".to_string(), json!(state.len()));
                Ok(patch)
            })),
        )
        .set_entry_point("copy");

    let mut caller_state = record(&[("a", json!(1))]);
    let run = workflow.run(caller_state.clone());
    caller_state.insert("b".to_string(), json!(2));
    let report = run.await.unwrap();

    assert_eq!(report.final_state["seen_keys"], json!(1));
    assert!(!report.final_state.contains_key("b"));
}

/// One workflow behind an Arc serves concurrent runs, each on its own state.
#[tokio::test]
async fn concurrent_runs_share_one_workflow() {
    let mut workflow = Workflow::new();
    workflow
        .add_node("A", increment("count"))
        .set_entry_point("A")
        .add_conditional_edge(
            "A",
            Arc::new(|state: &WorkflowState| {
                if state["count"].as_i64() >= Some(5) {
                    END.to_string()
                } else {
                    "A".to_string()
                }
            }),
        );
    let workflow = Arc::new(workflow);

    let mut handles = Vec::new();
    for start in 0..4_i64 {
        let workflow = workflow.clone();
        handles.push(tokio::spawn(async move {
            workflow.run(record(&[("count", json!(start))])).await
        }));
    }
    for handle in handles {
        let report = handle.await.unwrap().unwrap();
        assert_eq!(report.final_state["count"], json!(5));
    }
}
