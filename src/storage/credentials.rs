//! API token credential management
//!
//! This module handles API token authentication via the CFL_API_TOKEN
//! environment variable. All authentication is stateless - no session
//! cookies or keyring storage.

use std::env;

/// Get the API token from environment variable
///
/// Returns the value of CFL_API_TOKEN if set and non-empty, otherwise None.
pub fn get_api_token() -> Option<String> {
    env::var("CFL_API_TOKEN").ok().filter(|k| !k.is_empty())
}
