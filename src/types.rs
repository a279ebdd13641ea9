//! Agent records returned by the directory search endpoint.
//!
//! These are read-only value objects: decoded once per invocation, rendered,
//! then dropped. Nothing here is constructed or mutated by the pipeline itself.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Open-ended key/value map carried by resources and job schemas.
pub type ResourceMap = BTreeMap<String, ResourceValue>;

/// Closed set of value kinds allowed inside open-ended record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<ResourceValue>),
    Map(ResourceMap),
}

/// Decode `null` as the type's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Liveness and performance metrics. `None` means "unknown / not computed"
/// and must render as "-", never as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentMetrics {
    #[serde(default)]
    pub successful_job_count: Option<f64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub unique_buyer_count: Option<f64>,
    #[serde(default)]
    pub mins_from_last_online_time: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_online: bool,
}

/// Structured price of a job offering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceV2 {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub price_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: f64,
}

/// A service offering published by an agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentJob {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub job_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default)]
    pub price_v2: Option<PriceV2>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_funds: bool,
    #[serde(default)]
    pub sla_minutes: Option<u64>,
    #[serde(default)]
    pub requirement: Option<ResourceValue>,
    #[serde(default)]
    pub deliverable: Option<ResourceValue>,
}

/// A named capability. Unknown keys are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<ResourceMap>,
    #[serde(flatten)]
    pub extra: ResourceMap,
}

/// One directory entry as returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contract_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub wallet_address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub twitter_handle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_pic: String,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub cluster: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub virtual_agent_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_virtual_agent: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metrics: AgentMetrics,
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<AgentJob>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<AgentResource>,
}
