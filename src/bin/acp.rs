//! ACP CLI Binary
//!
//! Command-line interface for searching the agent directory.

use acp_search::logging::init_logging;
use acp_search::tooling::cli::{Cli, CliContext};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(Some(&config.logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    let context = match CliContext::new(&config, cli.no_color) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing search client: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            print!("{}", output);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
