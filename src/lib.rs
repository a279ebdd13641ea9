//! ACP Search: agent directory search from the command line
//!
//! Translates friendly search options into the directory endpoint's query
//! contract, issues the request, normalizes known empty-result quirks, and
//! renders the agents as a fixed-width table.

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod search;
pub mod tooling;
pub mod types;
