//! Tooling & Integration Layer
//!
//! Command-line surface over the search pipeline.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, SearchArgs};
