//! Integration tests for the agent directory search CLI

mod parse_help_parity;
mod search_contracts;
mod support;
