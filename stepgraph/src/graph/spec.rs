//! Declarative graph description: names in, `Workflow` out.
//!
//! `GraphSpec` is the serializable form a graph arrives in over the wire or
//! from a file. Step and router names are resolved through a `ToolRegistry`
//! at assembly time; resolution failures are build errors, distinct from
//! the runner's `NodeNotFound`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::workflow::Workflow;
use crate::registry::ToolRegistry;

/// Error assembling a `Workflow` from a `GraphSpec`.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A name in `nodes` resolves to no registered node.
    #[error("tool not registered: {0}")]
    NodeNotRegistered(String),
    /// A value in `conditional_edges` resolves to no registered router.
    #[error("router not registered: {0}")]
    RouterNotRegistered(String),
}

/// Graph description over registered tool names.
///
/// `nodes` lists the step names to pull from the registry; `edges` maps
/// source → target; `conditional_edges` maps source → router name. The
/// entry point and edge targets are taken verbatim and checked only when a
/// run reaches them, matching the builder's lazy validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<String>,
    pub entry_point: String,
    #[serde(default)]
    pub edges: HashMap<String, String>,
    /// Source node → router name. The router returns the next node's name.
    #[serde(default)]
    pub conditional_edges: HashMap<String, String>,
}

impl GraphSpec {
    /// Resolves every name through `registry` and builds the workflow.
    pub fn assemble(&self, registry: &ToolRegistry) -> Result<Workflow, BuildError> {
        let mut workflow = Workflow::new();
        for name in &self.nodes {
            let node = registry
                .node(name)
                .ok_or_else(|| BuildError::NodeNotRegistered(name.clone()))?;
            workflow.add_node(name.clone(), node);
        }
        workflow.set_entry_point(self.entry_point.clone());
        for (from, to) in &self.edges {
            workflow.add_edge(from.clone(), to.clone());
        }
        for (source, router_name) in &self.conditional_edges {
            let router = registry
                .router(router_name)
                .ok_or_else(|| BuildError::RouterNotRegistered(router_name.clone()))?;
            workflow.add_conditional_edge(source.clone(), router);
        }
        Ok(workflow)
    }
}
