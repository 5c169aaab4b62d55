//! CQL query construction
//!
//! Builds the single search query an invocation sends. The phrase is
//! embedded verbatim inside the `text~"..."` clause.

use crate::error::CliError;

pub const DEFAULT_LIMIT: u32 = 10;

const EXPAND_FIELDS: &str = "space,history,version";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub cql: String,
    pub limit: u32,
}

impl SearchQuery {
    /// Build a page search query from a user phrase and an optional limit.
    ///
    /// The phrase is trimmed; an empty phrase is rejected. The limit falls
    /// back to [`DEFAULT_LIMIT`] and is clamped to at least 1.
    pub fn build(phrase: &str, limit: Option<u32>) -> Result<Self, CliError> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(CliError::InvalidArguments(
                "Search phrase cannot be empty".to_string(),
            ));
        }

        let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);

        Ok(SearchQuery {
            cql: format!("type=page AND text~\"{phrase}\""),
            limit,
        })
    }

    /// Wire parameters for the content search endpoint
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cql", self.cql.clone()),
            ("limit", self.limit.to_string()),
            ("expand", EXPAND_FIELDS.to_string()),
        ]
    }
}
