//! Agent directory search pipeline.
//!
//! Options are validated and translated into the endpoint's parameter
//! contract, a single request is issued, and the outcome is classified and
//! rendered. No state is kept between invocations.

pub mod classify;
pub mod options;
pub mod params;
pub mod render;
pub mod service;
pub mod transport;

pub use classify::{classify_failure, classify_response, is_empty_result_quirk, SearchOutcome};
pub use options::{
    validate_search, GraduationFilter, MatchMode, OnlineFilter, SearchDefaults, SearchMode,
    SearchOptions, CLAW_CLUSTER, SEARCH_DEFAULTS,
};
pub use params::{build_params, SearchParams};
pub use render::{format_empty_notice, format_results, format_summary, format_table};
pub use service::SearchService;
pub use transport::{HttpSearchTransport, SearchTransport, TransportFailure, DEFAULT_SEARCH_URL};
