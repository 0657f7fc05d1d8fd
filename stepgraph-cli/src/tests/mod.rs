//! Unit tests for the CLI run logic.
