use serde::Deserialize;
use serde_json::Value;

/// Inbound payload for the commerce proxy. `type` selects the branch;
/// the remaining fields are only meaningful for one of the two.
#[derive(Debug, Clone, Deserialize)]
pub struct CommerceRequest {
    #[serde(rename = "type")]
    pub request_type: Option<String>,
    pub endpoint: Option<String>,
    pub query: Option<String>,
    pub variables: Option<Value>,
}
