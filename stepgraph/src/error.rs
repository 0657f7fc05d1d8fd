//! Node execution error type.
//!
//! Returned by `Node::run` when a transform fails. The runner records the
//! failure in the trace and wraps it in `EngineError::NodeFailed`.

use thiserror::Error;

/// Error raised by a node's transform.
///
/// A run stops at the first node error; nothing is retried or skipped. No
/// separate error types per failure kind in this minimal API: a node reports
/// what went wrong as a message.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The transform failed with a message (e.g. missing key, bad value shape).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display format of ExecutionFailed contains "execution failed" and the message.
    #[test]
    fn node_error_display_execution_failed() {
        let err = NodeError::ExecutionFailed("msg".to_string());
        let s = err.to_string();
        assert!(
            s.contains("execution failed"),
            "Display should contain 'execution failed': {}",
            s
        );
        assert!(s.contains("msg"), "Display should contain message: {}", s);
    }

    /// **Scenario**: Debug format includes variant name and message.
    #[test]
    fn node_error_debug_format() {
        let err = NodeError::ExecutionFailed("test".to_string());
        let s = format!("{:?}", err);
        assert!(
            s.contains("ExecutionFailed"),
            "Debug should contain variant name: {}",
            s
        );
        assert!(s.contains("test"), "Debug should contain message: {}", s);
    }
}
