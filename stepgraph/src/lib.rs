//! # stepgraph
//!
//! A minimal graph-based workflow interpreter in Rust. Build directed graphs
//! of named processing steps with a simple **state-in, patch-out** design:
//! one JSON state flows through the nodes, and each node returns a patch that
//! is merged into the running state by shallow key overwrite.
//!
//! ## Design Principles
//!
//! - **Named nodes**: steps are registered under string names; edges and
//!   routers refer to names, which are resolved when a run reaches them.
//! - **One node at a time**: execution is single-path; each node runs to
//!   completion on an owned state snapshot before its patch lands, so nodes
//!   never observe each other mid-step.
//! - **Bounded runs**: a hard 100-step ceiling guards cyclic graphs; hitting
//!   it is a truncated success with a trace line, not an error.
//!
//! ## Main Modules
//!
//! - [`graph`]: `Workflow`, `Node`, `RouterFn`, `GraphSpec`. Build and run
//!   workflow graphs.
//! - [`registry`]: `ToolRegistry`. Resolves textual step/router names to
//!   callables when assembling graphs from descriptions.
//! - [`quality`]: the demo data-quality pipeline (concrete nodes, router,
//!   registration, fixed graph).
//! - [`state`]: the JSON state record, patches, and the shallow merge.
//! - [`error`]: what node transforms return on failure.
//!
//! ## Features
//!
//! - `tracing`: structured run/node/transition events via the tracing crate;
//!   without it, the same events fall back to stderr.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use serde_json::json;
//! use stepgraph::{FnNode, StatePatch, Workflow, WorkflowState, END};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut workflow = Workflow::new();
//! workflow
//!     .add_node(
//!         "double",
//!         Arc::new(FnNode::new(|state: WorkflowState| {
//!             let n = state["n"].as_i64().unwrap_or(0);
//!             let mut patch = StatePatch::new();
//!             patch.insert("n".into(), json!(n * 2));
//!             Ok(patch)
//!         })),
//!     )
//!     .set_entry_point("double")
//!     .add_edge("double", END);
//!
//! let mut initial = WorkflowState::new();
//! initial.insert("n".into(), json!(21));
//! let report = workflow.run(initial).await.unwrap();
//! assert_eq!(report.final_state["n"], json!(42));
//! # }
//! ```
//!
//! Run the demo pipeline: `cargo run -p stepgraph-examples --example data_quality`
//!
//! ## Examples
//!
//! Runnable graphs (counter loop, data quality, spec assembly) live in
//! `stepgraph-examples`, not in this interpreter crate.

pub mod error;
pub mod graph;
pub mod quality;
pub mod registry;
pub mod state;

pub use error::NodeError;
pub use graph::{
    BuildError, EngineError, FnNode, GraphSpec, Node, RouterFn, RunFailure, RunReport, Workflow,
    END, MAX_STEPS,
};
pub use quality::{
    build_pipeline, check_anomalies_loop, register_tools, ApplyRulesNode, GenerateRulesNode,
    IdentifyAnomaliesNode, ProfileDataNode,
};
pub use registry::ToolRegistry;
pub use state::{apply_patch, StatePatch, WorkflowState};
