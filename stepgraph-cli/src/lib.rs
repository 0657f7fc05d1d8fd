//! # stepgraph-cli
//!
//! Library backing the `stepgraph` binary.
//!
//! Exposes the run logic so it can be tested and reused directly:
//! [`run_quality`] drives the built-in data-quality pipeline from plain
//! values, and [`load_run_inputs`] assembles a workflow from a graph
//! description file plus an initial state file.

mod run;

pub use run::{load_run_inputs, run_quality, Error};

#[cfg(test)]
mod tests;
