//! Workflow graphs: named nodes, edges, conditional routers, run.
//!
//! Build a `Workflow` with `add_node` / `set_entry_point` / `add_edge` /
//! `add_conditional_edge` (use `END` for graph exit), then `run` it against
//! an initial state to get a `RunReport` with the final state and trace.
//! `GraphSpec` assembles workflows from declarative name-based descriptions
//! through a `ToolRegistry`.

mod logging;
mod node;
mod router;
mod run_error;
mod runner;
mod spec;
mod workflow;

pub use node::{FnNode, Node};
pub use router::RouterFn;
pub use run_error::{EngineError, RunFailure};
pub use runner::{RunReport, MAX_STEPS};
pub use spec::{BuildError, GraphSpec};
pub use workflow::{Workflow, END};
