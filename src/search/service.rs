//! Search request lifecycle: validate, build parameters, issue the single
//! request, classify the outcome.

use super::classify::{classify_failure, classify_response, SearchOutcome};
use super::options::{validate_search, SearchOptions};
use super::params::build_params;
use super::render::{format_empty_notice, format_results};
use super::transport::SearchTransport;
use crate::error::ApiError;
use crate::output::Output;
use tracing::{debug, info, warn};

pub struct SearchService<'a, T: SearchTransport + ?Sized> {
    transport: &'a T,
}

impl<'a, T: SearchTransport + ?Sized> SearchService<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Run one search. Usage errors are returned before the transport is touched;
    /// exactly one request is issued otherwise.
    pub async fn search(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> Result<SearchOutcome, ApiError> {
        validate_search(query, opts)?;
        let params = build_params(query, opts)?;
        debug!(?params, "built search parameters");

        let outcome = match self.transport.get(&params).await {
            Ok(body) => classify_response(body)?,
            Err(failure) => {
                let outcome = classify_failure(failure.clone())?;
                warn!(error = %failure, "backend query error treated as empty result");
                outcome
            }
        };

        if outcome.is_empty() {
            info!(query, "no agents found");
        } else {
            info!(query, results = outcome.agents().len(), "search completed");
        }
        Ok(outcome)
    }

    /// Search and render the outcome for display.
    pub async fn search_and_render(
        &self,
        query: &str,
        opts: &SearchOptions,
        out: &Output,
    ) -> Result<String, ApiError> {
        let outcome = self.search(query, opts).await?;
        out.emit(outcome.agents(), |agents| {
            if agents.is_empty() {
                format_empty_notice(query)
            } else {
                format_results(out, query, opts, agents)
            }
        })
    }
}
