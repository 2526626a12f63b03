//! Unit tests for agentrun-cli, organized by module.
//!
//! Tests are BDD-style with Given/When/Then comments and descriptive names.

mod config;
mod report;
