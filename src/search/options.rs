//! Search options, their closed value domains, and the validation phase.

use crate::error::ApiError;
use std::fmt;
use std::str::FromStr;

/// Server-side search algorithm as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Hybrid,
    Vector,
    Keyword,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::Hybrid => "hybrid",
            SearchMode::Vector => "vector",
            SearchMode::Keyword => "keyword",
        }
    }

    /// Value of the endpoint's `searchMode` parameter.
    pub fn api_value(self) -> &'static str {
        match self {
            SearchMode::Hybrid => "hybrid",
            SearchMode::Vector => "dense",
            SearchMode::Keyword => "sparse",
        }
    }
}

impl FromStr for SearchMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hybrid" => Ok(SearchMode::Hybrid),
            "vector" => Ok(SearchMode::Vector),
            "keyword" => Ok(SearchMode::Keyword),
            _ => Err(ApiError::UsageError(format!(
                "Invalid search mode \"{}\". Use: hybrid, vector, keyword",
                s
            ))),
        }
    }
}

/// Graduation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraduationFilter {
    Graduated,
    Ungraduated,
    All,
}

impl GraduationFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            GraduationFilter::Graduated => "graduated",
            GraduationFilter::Ungraduated => "ungraduated",
            GraduationFilter::All => "all",
        }
    }

    /// Value of the `hasGraduated` parameter; `None` means no filter.
    pub fn has_graduated(self) -> Option<bool> {
        match self {
            GraduationFilter::Graduated => Some(true),
            GraduationFilter::Ungraduated => Some(false),
            GraduationFilter::All => None,
        }
    }
}

impl FromStr for GraduationFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graduated" => Ok(GraduationFilter::Graduated),
            "ungraduated" => Ok(GraduationFilter::Ungraduated),
            "all" => Ok(GraduationFilter::All),
            _ => Err(ApiError::UsageError(format!(
                "Invalid graduation filter \"{}\". Use: graduated, ungraduated, all",
                s
            ))),
        }
    }
}

/// Liveness filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnlineFilter {
    Online,
    Offline,
    All,
}

impl OnlineFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            OnlineFilter::Online => "online",
            OnlineFilter::Offline => "offline",
            OnlineFilter::All => "all",
        }
    }

    /// Value of the `isOnline` parameter; `None` means no filter.
    pub fn is_online(self) -> Option<bool> {
        match self {
            OnlineFilter::Online => Some(true),
            OnlineFilter::Offline => Some(false),
            OnlineFilter::All => None,
        }
    }
}

impl FromStr for OnlineFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(OnlineFilter::Online),
            "offline" => Ok(OnlineFilter::Offline),
            "all" => Ok(OnlineFilter::All),
            _ => Err(ApiError::UsageError(format!(
                "Invalid online filter \"{}\". Use: online, offline, all",
                s
            ))),
        }
    }
}

/// How multiple `contains` terms combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    All,
    Any,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::All => "all",
            MatchMode::Any => "any",
        }
    }
}

impl FromStr for MatchMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(MatchMode::All),
            "any" => Ok(MatchMode::Any),
            _ => Err(ApiError::UsageError(format!(
                "Invalid match mode \"{}\". Use: all, any",
                s
            ))),
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(SearchMode, GraduationFilter, OnlineFilter, MatchMode);

/// Server-side defaults, documented for help text and the summary line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchDefaults {
    pub mode: SearchMode,
    pub online: OnlineFilter,
    pub performance_weight: f64,
    pub similarity_cutoff: f64,
    pub sparse_cutoff: f64,
    pub match_mode: MatchMode,
}

pub const SEARCH_DEFAULTS: SearchDefaults = SearchDefaults {
    mode: SearchMode::Hybrid,
    online: OnlineFilter::Online,
    performance_weight: 0.97,
    similarity_cutoff: 0.5,
    sparse_cutoff: 0.0,
    match_mode: MatchMode::All,
};

/// Cluster value sent when `claw` is set.
pub const CLAW_CLUSTER: &str = "OPENCLAW";

/// Command-level search options. Every field is optional.
///
/// Enumerated options stay as the raw strings the user typed; they are checked
/// by [`validate_search`] and parsed where they are consumed. Empty strings
/// count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub mode: Option<String>,
    pub graduation: Option<String>,
    pub online: Option<String>,
    pub claw: bool,
    pub contains: Option<String>,
    pub match_mode: Option<String>,
    pub performance_weight: Option<f64>,
    pub similarity_cutoff: Option<f64>,
    pub sparse_cutoff: Option<f64>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl SearchOptions {
    pub fn mode_str(&self) -> Option<&str> {
        present(&self.mode)
    }

    pub fn graduation_str(&self) -> Option<&str> {
        present(&self.graduation)
    }

    pub fn online_str(&self) -> Option<&str> {
        present(&self.online)
    }

    pub fn contains_str(&self) -> Option<&str> {
        present(&self.contains)
    }

    pub fn match_str(&self) -> Option<&str> {
        present(&self.match_mode)
    }

    /// Requested search mode, if any.
    pub fn search_mode(&self) -> Result<Option<SearchMode>, ApiError> {
        self.mode_str().map(str::parse).transpose()
    }

    /// Graduation applied when the user gave none.
    ///
    /// No claw agents have graduated yet, so filtering claw results to
    /// "graduated" would always be empty.
    pub fn default_graduation(&self) -> GraduationFilter {
        if self.claw {
            GraduationFilter::All
        } else {
            GraduationFilter::Graduated
        }
    }

    pub fn effective_graduation(&self) -> Result<GraduationFilter, ApiError> {
        match self.graduation_str() {
            Some(g) => g.parse(),
            None => Ok(self.default_graduation()),
        }
    }

    pub fn effective_online(&self) -> Result<OnlineFilter, ApiError> {
        match self.online_str() {
            Some(o) => o.parse(),
            None => Ok(SEARCH_DEFAULTS.online),
        }
    }

    pub fn effective_match(&self) -> Result<MatchMode, ApiError> {
        match self.match_str() {
            Some(m) => m.parse(),
            None => Ok(SEARCH_DEFAULTS.match_mode),
        }
    }
}

/// Validation phase run before any network call.
pub fn validate_search(query: &str, opts: &SearchOptions) -> Result<(), ApiError> {
    if query.trim().is_empty() {
        return Err(ApiError::UsageError(
            "Usage: acp search <query>\n  Run `acp search --help` for all options.".to_string(),
        ));
    }

    if opts.match_str().is_some() && opts.contains_str().is_none() {
        return Err(ApiError::UsageError("--match requires --contains".to_string()));
    }

    if let Some(online) = opts.online_str() {
        online.parse::<OnlineFilter>()?;
    }

    if let Some(graduation) = opts.graduation_str() {
        graduation.parse::<GraduationFilter>()?;
    }

    if let Some(match_mode) = opts.match_str() {
        match_mode.parse::<MatchMode>()?;
    }

    for (flag, value) in [
        ("--performanceWeight", opts.performance_weight),
        ("--similarityCutoff", opts.similarity_cutoff),
        ("--sparseCutoff", opts.sparse_cutoff),
    ] {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(ApiError::UsageError(format!(
                    "{} must be a finite number, got {}",
                    flag, v
                )));
            }
        }
    }

    Ok(())
}
