//! Confluence REST API client layer
//!
//! One authenticated HTTP client plus the untrusted wire models it returns.

pub mod client;
pub mod models;

pub use client::ConfluenceClient;
pub use models::{CurrentUser, RawResult, SearchResponse};
