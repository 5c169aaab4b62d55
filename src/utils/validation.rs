//! Input validation and sanitization utilities
//!
//! This module provides utilities for validating and sanitizing user input,
//! configuration values, and API parameters.

use crate::error::CliError;

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    // Basic URL validation - must start with http:// or https://
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{url}': URL must start with http:// or https://"
        ))
        .into());
    }

    Ok(())
}

/// Validate a search phrase before it is embedded in a CQL query
pub fn validate_search_phrase(phrase: &str) -> crate::Result<()> {
    if phrase.trim().is_empty() {
        return Err(
            CliError::InvalidArguments("Search phrase cannot be empty".to_string()).into(),
        );
    }

    Ok(())
}

/// Validate the result limit requested on the command line
pub fn validate_limit(limit: u32) -> crate::Result<()> {
    if limit == 0 {
        return Err(
            CliError::InvalidArguments("Limit must be at least 1".to_string()).into(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:8090").is_ok());
        assert!(validate_url("https://acme.atlassian.net/wiki").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("acme.atlassian.net").is_err());
        assert!(validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_search_phrase_accepts_text() {
        assert!(validate_search_phrase("release checklist").is_ok());
        assert!(validate_search_phrase("  padded  ").is_ok());
    }

    #[test]
    fn test_validate_search_phrase_rejects_blank() {
        assert!(validate_search_phrase("").is_err());
        assert!(validate_search_phrase("   ").is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(25).is_ok());
        assert!(validate_limit(0).is_err());
    }
}
