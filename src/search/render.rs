//! Text rendering of search results: settings summary, fixed-width table,
//! and the empty-result notice.

use super::options::{SearchOptions, SEARCH_DEFAULTS};
use crate::output::Output;
use crate::types::Agent;

const W_RANK: usize = 4;
const W_NAME: usize = 20;
const W_ID: usize = 6;
const W_CATEGORY: usize = 16;
const W_RATE: usize = 9;
const W_JOBS: usize = 6;
const W_BUYERS: usize = 8;
const W_ONLINE: usize = 6;

/// Shorten `s` to at most `max` characters, replacing the last kept
/// character with an ellipsis when it overflows.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn optional_cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// One table row, columns already stringified.
struct Row {
    rank: String,
    name: String,
    id: String,
    category: String,
    rate: String,
    jobs: String,
    buyers: String,
    online: String,
}

impl Row {
    fn header() -> Self {
        Self {
            rank: "#".to_string(),
            name: "Name".to_string(),
            id: "ID".to_string(),
            category: "Category".to_string(),
            rate: "Success".to_string(),
            jobs: "Jobs".to_string(),
            buyers: "Buyers".to_string(),
            online: "Online".to_string(),
        }
    }

    fn from_agent(rank: usize, agent: &Agent) -> Self {
        let metrics = &agent.metrics;
        Self {
            rank: rank.to_string(),
            name: agent.name.clone(),
            id: agent.id.to_string(),
            category: agent.category.clone().unwrap_or_else(|| "-".to_string()),
            rate: optional_cell(metrics.success_rate.map(|r| format!("{:.1}%", r))),
            jobs: optional_cell(metrics.successful_job_count),
            buyers: optional_cell(metrics.unique_buyer_count),
            online: if metrics.is_online { "Yes" } else { "No" }.to_string(),
        }
    }

    fn render(&self) -> String {
        format!(
            "  {:>rank_w$}  {:<name_w$}  {:<id_w$}  {:<cat_w$}  {:>rate_w$}  {:>jobs_w$}  {:>buyers_w$}  {:<online_w$}",
            self.rank,
            truncate(&self.name, W_NAME),
            self.id,
            truncate(&self.category, W_CATEGORY),
            self.rate,
            self.jobs,
            self.buyers,
            self.online,
            rank_w = W_RANK,
            name_w = W_NAME,
            id_w = W_ID,
            cat_w = W_CATEGORY,
            rate_w = W_RATE,
            jobs_w = W_JOBS,
            buyers_w = W_BUYERS,
            online_w = W_ONLINE,
        )
    }
}

/// Fixed-width table: muted header, then one row per agent in server order.
pub fn format_table(out: &Output, agents: &[Agent]) -> String {
    let mut lines = Vec::with_capacity(agents.len() + 1);
    lines.push(out.dim(&Row::header().render()));
    for (i, agent) in agents.iter().enumerate() {
        lines.push(Row::from_agent(i + 1, agent).render());
    }
    lines.join("\n")
}

/// Effective mode and rerank weight, then the filters that differ from their defaults.
pub fn format_summary(opts: &SearchOptions) -> String {
    let mut parts = Vec::new();

    parts.push(format!(
        "mode={}",
        opts.mode_str().unwrap_or(SEARCH_DEFAULTS.mode.as_str())
    ));
    parts.push(format!(
        "rerank weight={}",
        opts.performance_weight
            .unwrap_or(SEARCH_DEFAULTS.performance_weight)
    ));

    let mut filters = Vec::new();

    let default_graduation = opts.default_graduation().as_str();
    let graduation = opts.graduation_str().unwrap_or(default_graduation);
    if graduation != "all" && graduation != default_graduation {
        filters.push(graduation.to_string());
    }

    let default_online = SEARCH_DEFAULTS.online.as_str();
    let online = opts.online_str().unwrap_or(default_online);
    if online != "all" && online != default_online {
        filters.push(online.to_string());
    }

    if opts.claw {
        filters.push("claw".to_string());
    }

    if let Some(contains) = opts.contains_str() {
        let match_mode = opts
            .match_str()
            .unwrap_or(SEARCH_DEFAULTS.match_mode.as_str());
        filters.push(format!("contains=\"{}\" (match={})", contains, match_mode));
    }

    if !filters.is_empty() {
        parts.push(filters.join(", "));
    }

    parts.join(" · ")
}

/// Full text page for a non-empty result set.
pub fn format_results(out: &Output, query: &str, opts: &SearchOptions, agents: &[Agent]) -> String {
    let count = agents.len();
    let lines = [
        String::new(),
        format!("  {}", out.heading(&format!("Search results for \"{}\"", query))),
        out.dim(&format!("  {}", format_summary(opts))),
        String::new(),
        format_table(out, agents),
        String::new(),
        out.dim(&format!(
            "  {} result{}",
            count,
            if count == 1 { "" } else { "s" }
        )),
        String::new(),
    ];
    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// Notice shared by true empty results and both backend quirks.
pub fn format_empty_notice(query: &str) -> String {
    format!("\n  No agents found for \"{}\".\n\n", query)
}
