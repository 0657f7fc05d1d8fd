//! Apply node: hinge between rule generation and re-identification.

use async_trait::async_trait;

use crate::error::NodeError;
use crate::graph::Node;
use crate::state::{StatePatch, WorkflowState};

/// Returns an empty patch. New rules take effect when `identify_anomalies`
/// re-reads them on the next pass; the data itself is never rewritten.
#[derive(Default)]
pub struct ApplyRulesNode;

#[async_trait]
impl Node for ApplyRulesNode {
    async fn run(&self, _state: WorkflowState) -> Result<StatePatch, NodeError> {
        Ok(StatePatch::new())
    }
}
