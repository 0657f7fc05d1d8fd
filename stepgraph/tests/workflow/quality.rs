//! Data-quality demo pipeline end to end.

use serde_json::json;
use stepgraph::{build_pipeline, END};

use crate::common::record;

/// Anomalous data converges after one rule pass: identify finds the two
/// values over 100, generate adds the allow rule, apply hands back to
/// identify, which now finds nothing.
#[tokio::test]
async fn pipeline_converges_after_one_rule_pass() {
    let workflow = build_pipeline();
    let report = workflow
        .run(record(&[("data", json!([10, 50, 150, 200, 30]))]))
        .await
        .unwrap();

    assert_eq!(report.final_state["anomalies"], json!([]));
    assert_eq!(
        report.final_state["rules"],
        json!([{ "allow_gt_100": true }])
    );
    assert_eq!(report.final_state["profile"]["count"], json!(5));

    let executed: Vec<&str> = report
        .trace
        .iter()
        .filter_map(|line| line.strip_prefix("Executing node: "))
        .collect();
    assert_eq!(
        executed,
        [
            "profile_data",
            "identify_anomalies",
            "generate_rules",
            "apply_rules",
            "identify_anomalies",
        ]
    );
    assert_eq!(
        report.trace.last().map(String::as_str),
        Some(format!("Condition evaluated. Next node: {}", END).as_str())
    );
}

/// A pre-seeded threshold that tolerates the anomalies ends the run after
/// the first identification pass, with no rules generated.
#[tokio::test]
async fn pipeline_honors_preseeded_threshold() {
    let workflow = build_pipeline();
    let report = workflow
        .run(record(&[
            ("data", json!([10, 50, 150, 200, 30])),
            ("threshold", json!(2)),
        ]))
        .await
        .unwrap();

    assert_eq!(report.final_state["anomalies"], json!([150, 200]));
    assert!(!report.final_state.contains_key("rules"));
}

/// Clean data never enters the rule loop.
#[tokio::test]
async fn pipeline_with_clean_data_ends_after_first_pass() {
    let workflow = build_pipeline();
    let report = workflow
        .run(record(&[("data", json!([1, 2, 3]))]))
        .await
        .unwrap();

    assert_eq!(report.final_state["anomalies"], json!([]));
    let executions = report
        .trace
        .iter()
        .filter(|line| line.starts_with("Executing node:"))
        .count();
    assert_eq!(executions, 2);
}
