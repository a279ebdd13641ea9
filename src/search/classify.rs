//! Classify search responses and failures into outcomes.
//!
//! Two backend quirks collapse into the same "no agents found" outcome as a
//! genuinely empty result:
//! - a 2xx body whose `data` is missing, null, not an array, or empty, which
//!   the backend returns when its filters reduce to an impossible condition;
//! - a failure whose message mentions `syntax` or `SQL`, which the backend
//!   raises for some empty filter combinations (an empty `WHERE IN ()`).

use super::transport::TransportFailure;
use crate::error::ApiError;
use crate::types::Agent;
use serde_json::Value;

/// Result of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Non-empty agent list in server rank order.
    Agents(Vec<Agent>),
    Empty,
}

impl SearchOutcome {
    pub fn agents(&self) -> &[Agent] {
        match self {
            SearchOutcome::Agents(agents) => agents,
            SearchOutcome::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SearchOutcome::Empty)
    }
}

/// Classify a successful response body.
pub fn classify_response(body: Value) -> Result<SearchOutcome, ApiError> {
    let data = match body {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };

    match data {
        Some(Value::Array(items)) if !items.is_empty() => {
            let agents: Vec<Agent> = serde_json::from_value(Value::Array(items))
                .map_err(|e| ApiError::ResponseError(e.to_string()))?;
            Ok(SearchOutcome::Agents(agents))
        }
        _ => Ok(SearchOutcome::Empty),
    }
}

/// Whether a failure message is the backend's empty-filter SQL error.
///
/// Substring match on the exact tokens the backend is known to produce.
pub fn is_empty_result_quirk(message: &str) -> bool {
    message.contains("syntax") || message.contains("SQL")
}

/// Classify a failed request: the SQL quirk is an empty result, anything else
/// is fatal and carries the original message.
pub fn classify_failure(failure: TransportFailure) -> Result<SearchOutcome, ApiError> {
    if is_empty_result_quirk(&failure.message) {
        Ok(SearchOutcome::Empty)
    } else {
        Err(ApiError::TransportError(failure.message))
    }
}
