//! Command-line interface for the Coldfind benchmark harness.

pub mod args;
pub mod commands;
pub mod output;
