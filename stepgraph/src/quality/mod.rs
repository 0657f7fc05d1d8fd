//! Data quality pipeline: profile → identify → (generate → apply → identify)* → end.
//!
//! Four concrete nodes implementing `Node` for the demo workflow: profile the
//! incoming data, flag anomalous values, generate allow rules, apply them,
//! and loop until the anomaly count is within the threshold. Register the
//! nodes and router by name with `register_tools`, or build the fixed demo
//! graph directly with `build_pipeline`.

mod apply_node;
mod generate_node;
mod identify_node;
mod pipeline;
mod profile_node;

pub use apply_node::ApplyRulesNode;
pub use generate_node::GenerateRulesNode;
pub use identify_node::IdentifyAnomaliesNode;
pub use pipeline::{build_pipeline, check_anomalies_loop, register_tools};
pub use profile_node::ProfileDataNode;
