//! Translate search options into the endpoint's query-parameter contract.

use super::options::{SearchOptions, CLAW_CLUSTER};
use crate::error::ApiError;
use std::collections::BTreeMap;

/// Flat string-keyed parameter set sent with the search request.
pub type SearchParams = BTreeMap<String, String>;

pub const PARAM_QUERY: &str = "query";
pub const PARAM_SEARCH_MODE: &str = "searchMode";
pub const PARAM_IS_ONLINE: &str = "isOnline";
pub const PARAM_HAS_GRADUATED: &str = "hasGraduated";
pub const PARAM_CLUSTER: &str = "cluster";
pub const PARAM_FULL_TEXT_FILTER: &str = "fullTextFilter";
pub const PARAM_FULL_TEXT_MATCH: &str = "fullTextMatch";
pub const PARAM_PERFORMANCE_WEIGHT: &str = "performanceWeight";
pub const PARAM_SIMILARITY_CUTOFF: &str = "similarityCutoff";
pub const PARAM_SPARSE_CUTOFF: &str = "sparseCutoff";

/// Build the request parameters for `query` and `opts`.
///
/// Reranking values are forwarded only when the user gave them; the server
/// applies its own defaults otherwise.
pub fn build_params(query: &str, opts: &SearchOptions) -> Result<SearchParams, ApiError> {
    let mut params = SearchParams::new();
    params.insert(PARAM_QUERY.to_string(), query.to_string());

    if let Some(mode) = opts.search_mode()? {
        params.insert(PARAM_SEARCH_MODE.to_string(), mode.api_value().to_string());
    }

    if let Some(is_online) = opts.effective_online()?.is_online() {
        params.insert(PARAM_IS_ONLINE.to_string(), is_online.to_string());
    }

    if let Some(has_graduated) = opts.effective_graduation()?.has_graduated() {
        params.insert(PARAM_HAS_GRADUATED.to_string(), has_graduated.to_string());
    }

    if opts.claw {
        params.insert(PARAM_CLUSTER.to_string(), CLAW_CLUSTER.to_string());
    }

    if let Some(contains) = opts.contains_str() {
        params.insert(PARAM_FULL_TEXT_FILTER.to_string(), contains.to_string());
    }
    if let Some(match_mode) = opts.match_str() {
        params.insert(PARAM_FULL_TEXT_MATCH.to_string(), match_mode.to_string());
    }

    for (key, value) in [
        (PARAM_PERFORMANCE_WEIGHT, opts.performance_weight),
        (PARAM_SIMILARITY_CUTOFF, opts.similarity_cutoff),
        (PARAM_SPARSE_CUTOFF, opts.sparse_cutoff),
    ] {
        if let Some(v) = value {
            params.insert(key.to_string(), v.to_string());
        }
    }

    Ok(params)
}
