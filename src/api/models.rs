use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer: accepts both string and numeric page ids
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Null => Ok(None),
        _ => Ok(None),
    }
}

/// Response envelope of the content search endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<RawResult>,
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub size: Option<u32>,
}

/// One search hit exactly as the wire delivers it; every field is optional
/// until normalization fills in defaults
#[derive(Debug, Deserialize, Clone)]
pub struct RawResult {
    #[serde(deserialize_with = "deserialize_id", default)]
    pub id: Option<String>,
    pub title: Option<String>,
    pub space: Option<RawSpace>,
    pub version: Option<RawVersion>,
    pub excerpt: Option<String>,
    #[serde(rename = "_links")]
    pub links: Option<RawLinks>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawSpace {
    pub key: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawVersion {
    pub when: Option<String>,
    pub by: Option<RawUser>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawUser {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// Links block; webui may be relative or malformed, so it is never used
/// to build display URLs
#[derive(Debug, Deserialize, Clone)]
pub struct RawLinks {
    pub webui: Option<String>,
}

/// Response of the current-user endpoint, used to validate credentials
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentUser {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub username: Option<String>,
}
