//! Core business logic
//!
//! Query construction and result normalization sit here, between the CLI
//! layer above and the API/storage layers below.

/// Result normalization into display-ready rows
pub mod mapper;

/// CQL query construction
pub mod query;

/// Application services
pub mod services;

pub use mapper::{PageHit, map_results};
pub use query::SearchQuery;
