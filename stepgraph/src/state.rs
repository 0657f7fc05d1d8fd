//! Workflow state: a string-keyed record of heterogeneous JSON values.
//!
//! One state shape flows through every node. A node receives an owned
//! snapshot and returns a patch; the runner merges the patch into the
//! running state by shallow key overwrite after the node completes.

use serde_json::{Map, Value};

/// Shared workflow state: string keys, arbitrary JSON values.
pub type WorkflowState = Map<String, Value>;

/// Partial state update returned by a node.
///
/// Same shape as [`WorkflowState`]; merged with [`apply_patch`]. A node that
/// changes nothing returns an empty patch.
pub type StatePatch = Map<String, Value>;

/// Merges `patch` into `state` by shallow key overwrite.
///
/// Patch keys replace existing keys of the same name; keys absent from the
/// patch are untouched. Values are not merged recursively.
pub fn apply_patch(state: &mut WorkflowState, patch: StatePatch) {
    for (key, value) in patch {
        state.insert(key, value);
    }
}
