//! Storage layer for cfl-cli
//!
//! Handles configuration and credential access. Uses a TOML file for
//! configuration and environment variables for the API token.

use crate::error::StorageError;

/// Configuration file management (TOML)
pub mod config;

/// API token access (environment variable)
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
