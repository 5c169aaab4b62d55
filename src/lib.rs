pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Business logic
pub mod storage; // Configuration and credentials

/// Support modules (used across layers)
pub mod api; // Confluence API client
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod test_support;
