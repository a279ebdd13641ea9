//! CLI Tooling
//!
//! Command-line interface for agent directory search. Each invocation is one
//! self-contained run: parse, load configuration, execute one command.

use crate::config::{AcpConfig, ConfigLoader};
use crate::error::ApiError;
use crate::output::{color_enabled, Output, OutputFormat};
use crate::search::{HttpSearchTransport, SearchOptions, SearchService, SearchTransport};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// ACP CLI - search the agent directory
#[derive(Parser)]
#[command(name = "acp")]
#[command(about = "Search the agent directory with semantic filters and reranking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load configuration and fold in the command-line logging flags.
    pub fn load_config(&self) -> Result<AcpConfig, ApiError> {
        let mut config = match &self.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        config.logging.apply_cli_overrides(
            self.verbose,
            self.log_level.as_deref(),
            self.log_format.as_deref(),
            self.log_output.as_deref(),
            self.log_file.as_deref(),
        );
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search agents with filters & reranking
    #[command(after_help = SEARCH_AFTER_HELP)]
    Search {
        /// Free-text query (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        args: SearchArgs,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

const SEARCH_AFTER_HELP: &str = "\
Defaults (applied server-side when a flag is omitted):
  mode=hybrid  online=online  graduation=graduated (all with --claw)
  performanceWeight=0.97  similarityCutoff=0.5  sparseCutoff=0  match=all

Set SEARCH_URL to query a different search endpoint.";

/// Search filters and reranking flags.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search algorithm: hybrid, vector, keyword [default: hybrid]
    #[arg(long)]
    pub mode: Option<String>,

    /// Graduation filter: graduated, ungraduated, all [default: graduated, or all with --claw]
    #[arg(long)]
    pub graduation: Option<String>,

    /// Liveness filter: online, offline, all [default: online]
    #[arg(long)]
    pub online: Option<String>,

    /// Only agents in the OpenClaw cluster
    #[arg(long)]
    pub claw: bool,

    /// Only agents whose text fields contain this text
    #[arg(long)]
    pub contains: Option<String>,

    /// How --contains terms combine: all, any [default: all]
    #[arg(long = "match")]
    pub match_mode: Option<String>,

    /// Reranking weight toward performance metrics [default: 0.97]
    #[arg(
        long = "performanceWeight",
        visible_alias = "performance-weight",
        allow_negative_numbers = true
    )]
    pub performance_weight: Option<f64>,

    /// Minimum vector similarity to keep a result [default: 0.5]
    #[arg(
        long = "similarityCutoff",
        visible_alias = "similarity-cutoff",
        allow_negative_numbers = true
    )]
    pub similarity_cutoff: Option<f64>,

    /// Minimum keyword score to keep a result [default: 0]
    #[arg(
        long = "sparseCutoff",
        visible_alias = "sparse-cutoff",
        allow_negative_numbers = true
    )]
    pub sparse_cutoff: Option<f64>,
}

impl From<SearchArgs> for SearchOptions {
    fn from(args: SearchArgs) -> Self {
        SearchOptions {
            mode: args.mode,
            graduation: args.graduation,
            online: args.online,
            claw: args.claw,
            contains: args.contains,
            match_mode: args.match_mode,
            performance_weight: args.performance_weight,
            similarity_cutoff: args.similarity_cutoff,
            sparse_cutoff: args.sparse_cutoff,
        }
    }
}

/// CLI context for command execution
pub struct CliContext {
    transport: Box<dyn SearchTransport>,
    color: bool,
}

impl CliContext {
    /// Create a context talking to the configured search endpoint.
    pub fn new(config: &AcpConfig, no_color: bool) -> Result<Self, ApiError> {
        let transport = HttpSearchTransport::new(config.search.url.clone(), config.search.timeout())
            .map_err(|e| ApiError::ConfigError(e.message))?;
        info!(url = %transport.url(), "search endpoint configured");
        Ok(Self::with_transport(Box::new(transport), color_enabled(no_color)))
    }

    /// Create a context over an arbitrary transport.
    pub fn with_transport(transport: Box<dyn SearchTransport>, color: bool) -> Self {
        Self { transport, color }
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Search {
                query,
                args,
                format,
            } => self.handle_search(&query.join(" "), args.clone().into(), format),
        }
    }

    fn handle_search(
        &self,
        query: &str,
        opts: SearchOptions,
        format: &str,
    ) -> Result<String, ApiError> {
        let format: OutputFormat = format.parse()?;
        let out = Output::new(format, self.color);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::TransportError(format!("Failed to create runtime: {}", e)))?;

        let service = SearchService::new(self.transport.as_ref());
        runtime.block_on(service.search_and_render(query, &opts, &out))
    }
}
