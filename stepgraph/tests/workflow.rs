//! Integration tests for Workflow: engine behavior, spec assembly, demo pipeline.
//!
//! Tests are split into modules under `workflow/`:
//! - `common`: shared state and node helpers
//! - `engine`: run loop scenarios, routing precedence, state isolation
//! - `assemble`: GraphSpec assembly through a ToolRegistry
//! - `quality`: the data-quality demo pipeline end to end

#[path = "workflow/common.rs"]
mod common;

#[path = "workflow/engine.rs"]
mod engine;

#[path = "workflow/assemble.rs"]
mod assemble;

#[path = "workflow/quality.rs"]
mod quality;
