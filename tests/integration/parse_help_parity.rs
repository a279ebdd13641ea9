use acp_search::search::SEARCH_DEFAULTS;
use acp_search::tooling::cli::{Cli, Commands};
use clap::{CommandFactory, Parser};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["acp", "search", "trading bot"],
        vec!["acp", "search", "trading", "bot", "--claw"],
        vec!["acp", "search", "bot", "--mode", "vector"],
        vec!["acp", "search", "bot", "--graduation", "all", "--online", "offline"],
        vec!["acp", "search", "bot", "--contains", "swap", "--match", "any"],
        vec![
            "acp",
            "search",
            "bot",
            "--performanceWeight",
            "0.9",
            "--similarityCutoff",
            "0.4",
            "--sparseCutoff",
            "0",
        ],
        vec!["acp", "search", "bot", "--sparseCutoff", "-0.5"],
        vec!["acp", "search", "bot", "--performance-weight", "-1", "--similarity-cutoff", "-0.25"],
        vec!["acp", "search", "bot", "--format", "json", "--no-color"],
        vec!["acp", "--verbose", "search", "bot"],
        vec!["acp", "search", "bot", "--log-level", "debug", "--config", "/tmp/acp.toml"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_query_and_unknown_flags() {
    assert!(Cli::try_parse_from(["acp", "search"]).is_err());
    assert!(Cli::try_parse_from(["acp", "search", "bot", "--fuzzy"]).is_err());
    assert!(Cli::try_parse_from(["acp", "search", "bot", "--sparseCutoff", "low"]).is_err());
}

#[test]
fn enumerated_values_are_left_to_validation() {
    let parsed = Cli::try_parse_from(["acp", "search", "bot", "--mode", "fuzzy"]).unwrap();
    let Commands::Search { args, .. } = parsed.command;
    assert_eq!(args.mode.as_deref(), Some("fuzzy"));
}

#[test]
fn negative_rerank_values_parse_as_numbers() {
    let parsed =
        Cli::try_parse_from(["acp", "search", "bot", "--sparseCutoff", "-0.5"]).unwrap();
    let Commands::Search { query, args, .. } = parsed.command;
    assert_eq!(query, vec!["bot".to_string()]);
    assert_eq!(args.sparse_cutoff, Some(-0.5));
}

#[test]
fn search_help_documents_defaults() {
    let mut command = Cli::command();
    let search = command
        .find_subcommand_mut("search")
        .expect("search subcommand");
    let help = search.render_long_help().to_string();

    for token in [
        format!("mode={}", SEARCH_DEFAULTS.mode),
        format!("online={}", SEARCH_DEFAULTS.online),
        format!("performanceWeight={}", SEARCH_DEFAULTS.performance_weight),
        format!("similarityCutoff={}", SEARCH_DEFAULTS.similarity_cutoff),
        format!("sparseCutoff={}", SEARCH_DEFAULTS.sparse_cutoff),
        format!("match={}", SEARCH_DEFAULTS.match_mode),
    ] {
        assert!(help.contains(&token), "help should mention {token}:\n{help}");
    }
    for flag in ["--performanceWeight", "--similarityCutoff", "--sparseCutoff", "--claw"] {
        assert!(help.contains(flag), "help should list {flag}");
    }
}
