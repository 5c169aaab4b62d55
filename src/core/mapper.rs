//! Normalization of raw search hits into display-ready rows
//!
//! Every optional wire field gets a defined substitute here so the
//! rendering layer never sees an absent value. Mapping is pure; the same
//! payload always yields the same rows in the same order.

use crate::api::models::{RawResult, SearchResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

const UNTITLED: &str = "Untitled";
const UNKNOWN: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";

/// One normalized search hit, ready for any output format
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageHit {
    pub id: String,
    pub title: String,
    pub space_name: String,
    pub space_key: String,
    pub url: String,
    pub updated_by: String,
    pub updated_date: String,
    pub excerpt: String,
}

/// Normalize every hit in the response, preserving server order
pub fn map_results(response: &SearchResponse, base_url: &str) -> Vec<PageHit> {
    response
        .results
        .iter()
        .map(|raw| map_result(raw, base_url))
        .collect()
}

fn map_result(raw: &RawResult, base_url: &str) -> PageHit {
    let id = raw.id.clone().unwrap_or_default();

    let title = match &raw.title {
        Some(t) if !t.trim().is_empty() => t.clone(),
        _ => UNTITLED.to_string(),
    };

    let (space_key, space_name) = match &raw.space {
        Some(space) => (
            space
                .key
                .clone()
                .filter(|k| !k.is_empty())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            space
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        ),
        None => (NOT_AVAILABLE.to_string(), UNKNOWN.to_string()),
    };

    let updated_by = raw
        .version
        .as_ref()
        .and_then(|v| v.by.as_ref())
        .and_then(|by| by.display_name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let updated_date = raw
        .version
        .as_ref()
        .and_then(|v| v.when.as_deref())
        .map(normalize_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    // The url is always rebuilt from the base URL and id; _links.webui is
    // untrusted and may be relative or malformed.
    let url = format!("{}/pages/{}", base_url.trim_end_matches('/'), id);

    let excerpt = raw.excerpt.as_deref().map(strip_markup).unwrap_or_default();

    PageHit {
        id,
        title,
        space_name,
        space_key,
        url,
        updated_by,
        updated_date,
        excerpt,
    }
}

/// RFC 3339 timestamp to a UTC calendar date, or "N/A" when unparseable
fn normalize_date(when: &str) -> String {
    DateTime::parse_from_rfc3339(when)
        .map(|dt| dt.with_timezone(&Utc).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| NOT_AVAILABLE.to_string())
}

/// Remove highlight markers and angle-bracket tags from excerpt text
fn strip_markup(text: &str) -> String {
    let without_markers = text.replace("@@@hl@@@", "").replace("@@@endhl@@@", "");

    let mut out = String::with_capacity(without_markers.len());
    let mut in_tag = false;
    for ch in without_markers.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
