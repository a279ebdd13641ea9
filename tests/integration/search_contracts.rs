use acp_search::error::ApiError;
use acp_search::search::format_empty_notice;
use acp_search::tooling::cli::{CliContext, Commands, SearchArgs};
use serde_json::json;

use crate::integration::support::{sample_agents, search_command, RecordingTransport};

#[test]
fn claw_search_sends_cluster_without_graduation_filter() {
    let (transport, requests) = RecordingTransport::replying(sample_agents());
    let cli = CliContext::with_transport(Box::new(transport), false);

    cli.execute(&search_command(
        "trading bot",
        SearchArgs {
            claw: true,
            ..Default::default()
        },
    ))
    .unwrap();

    let requests = requests.lock();
    assert_eq!(requests.len(), 1);
    let params = &requests[0];
    assert_eq!(params.get("query").map(String::as_str), Some("trading bot"));
    assert_eq!(params.get("cluster").map(String::as_str), Some("OPENCLAW"));
    assert_eq!(params.get("isOnline").map(String::as_str), Some("true"));
    assert!(!params.contains_key("hasGraduated"));
    assert!(!params.contains_key("searchMode"));
}

#[test]
fn every_option_reaches_the_request() {
    let (transport, requests) = RecordingTransport::replying(sample_agents());
    let cli = CliContext::with_transport(Box::new(transport), false);

    cli.execute(&search_command(
        "nft",
        SearchArgs {
            mode: Some("keyword".to_string()),
            graduation: Some("ungraduated".to_string()),
            online: Some("all".to_string()),
            contains: Some("mint".to_string()),
            match_mode: Some("any".to_string()),
            performance_weight: Some(0.25),
            similarity_cutoff: Some(0.6),
            sparse_cutoff: Some(0.1),
            ..Default::default()
        },
    ))
    .unwrap();

    let params = requests.lock()[0].clone();
    let expected: Vec<(&str, &str)> = vec![
        ("fullTextFilter", "mint"),
        ("fullTextMatch", "any"),
        ("hasGraduated", "false"),
        ("performanceWeight", "0.25"),
        ("query", "nft"),
        ("searchMode", "sparse"),
        ("similarityCutoff", "0.6"),
        ("sparseCutoff", "0.1"),
    ];
    let actual: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn usage_errors_never_reach_the_network() {
    let cases = vec![
        search_command("   ", SearchArgs::default()),
        search_command(
            "bot",
            SearchArgs {
                match_mode: Some("all".to_string()),
                claw: true,
                ..Default::default()
            },
        ),
        search_command(
            "bot",
            SearchArgs {
                online: Some("idle".to_string()),
                ..Default::default()
            },
        ),
        search_command(
            "bot",
            SearchArgs {
                graduation: Some("pending".to_string()),
                ..Default::default()
            },
        ),
        search_command(
            "bot",
            SearchArgs {
                mode: Some("semantic".to_string()),
                ..Default::default()
            },
        ),
    ];

    for command in cases {
        let (transport, requests) = RecordingTransport::replying(sample_agents());
        let cli = CliContext::with_transport(Box::new(transport), false);
        let err = cli.execute(&command).unwrap_err();
        assert!(matches!(err, ApiError::UsageError(_)), "unexpected error: {err}");
        assert!(requests.lock().is_empty());
    }
}

#[test]
fn empty_payload_shapes_and_sql_errors_render_identically() {
    let expected = format_empty_notice("ghost agent");

    let replies = vec![
        RecordingTransport::replying(json!({ "data": [] })),
        RecordingTransport::replying(json!({ "data": null })),
        RecordingTransport::replying(json!({ "message": "ok" })),
        RecordingTransport::failing("HTTP 500 Internal Server Error: syntax error at or near \")\""),
        RecordingTransport::failing("QueryFailedError: SQL state 42601"),
    ];

    for (transport, _) in replies {
        let cli = CliContext::with_transport(Box::new(transport), false);
        let output = cli
            .execute(&search_command("ghost agent", SearchArgs::default()))
            .unwrap();
        assert_eq!(output, expected);
    }
}

#[test]
fn other_failures_are_fatal_and_keep_the_message() {
    let (transport, requests) = RecordingTransport::failing("HTTP 401 Unauthorized: missing key");
    let cli = CliContext::with_transport(Box::new(transport), false);
    let err = cli
        .execute(&search_command("bot", SearchArgs::default()))
        .unwrap_err();
    assert!(matches!(err, ApiError::TransportError(_)));
    assert_eq!(err.to_string(), "Search failed: HTTP 401 Unauthorized: missing key");
    assert_eq!(requests.lock().len(), 1);
}

#[test]
fn results_render_as_table_in_server_order() {
    let (transport, _) = RecordingTransport::replying(sample_agents());
    let cli = CliContext::with_transport(Box::new(transport), false);
    let output = cli
        .execute(&search_command("market", SearchArgs::default()))
        .unwrap();

    assert!(output.contains("Search results for \"market\""));
    assert!(output.contains("mode=hybrid · rerank weight=0.97"));
    assert!(output.contains("2 results"));

    let rows: Vec<&str> = output
        .lines()
        .skip_while(|l| !l.trim_start().starts_with('#'))
        .skip(1)
        .take(2)
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("A very long agent n…"));
    assert!(rows[0].contains("101"));
    assert!(!rows[0].contains("0.0%"));
    assert!(rows[0].trim_end().ends_with("Yes"));
    assert!(rows[1].contains("Swapper"));
    assert!(rows[1].contains("87.5%"));
    assert!(rows[1].trim_end().ends_with("No"));
}

#[test]
fn json_format_emits_agent_records() {
    let (transport, _) = RecordingTransport::replying(sample_agents());
    let cli = CliContext::with_transport(Box::new(transport), false);
    let output = cli
        .execute(&Commands::Search {
            query: vec!["market".to_string()],
            args: SearchArgs::default(),
            format: "json".to_string(),
        })
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let agents = parsed.as_array().expect("json output should be an array");
    assert_eq!(agents.len(), 2);
    assert_eq!(agents[0].get("id").and_then(|v| v.as_u64()), Some(101));
    assert!(agents[0]["metrics"]["successRate"].is_null());
    assert_eq!(agents[1]["category"], "DeFi");
}
