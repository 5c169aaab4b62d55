//! Configuration service for managing application configuration

use crate::AppError;
use crate::storage::config::{Config, DEFAULT_BASE_URL};
use std::path::PathBuf;

/// Configuration service for managing application configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    /// Create new ConfigService instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get configured URL
    pub fn get_url(&self) -> Option<String> {
        self.config.get_url()
    }

    /// Effective base URL after applying the hardcoded default
    pub fn resolved_url(&self) -> String {
        self.get_url()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get configured account email
    pub fn get_email(&self) -> Option<String> {
        self.config.get_email()
    }

    /// Set URL
    pub fn set_url(&mut self, url: String) {
        self.config.set_url(url);
    }

    /// Set account email
    pub fn set_email(&mut self, email: String) {
        self.config.set_email(email);
    }

    /// Save configuration to file
    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }

    /// Fully configured means both an API token and an account email exist
    pub fn is_configured(&self, has_token: bool) -> bool {
        has_token && self.get_email().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_url_falls_back_to_default() {
        let _env = crate::test_support::env_lock();

        // Temporarily clear CFL_URL to ensure test isolation
        let original = std::env::var("CFL_URL").ok();
        unsafe {
            std::env::remove_var("CFL_URL");
        }

        let service = ConfigService::new(Config::default());
        assert!(service.get_url().is_none());
        assert_eq!(service.resolved_url(), DEFAULT_BASE_URL);

        // Restore original state
        unsafe {
            if let Some(value) = original {
                std::env::set_var("CFL_URL", value);
            }
        }
    }

    #[test]
    fn test_set_url() {
        let _env = crate::test_support::env_lock();

        // Temporarily clear CFL_URL to ensure test isolation
        let original = std::env::var("CFL_URL").ok();
        unsafe {
            std::env::remove_var("CFL_URL");
        }

        let mut service = ConfigService::new(Config::default());
        service.set_url("http://localhost:8090/wiki".to_string());

        assert_eq!(service.resolved_url(), "http://localhost:8090/wiki");

        // Restore original state
        unsafe {
            if let Some(value) = original {
                std::env::set_var("CFL_URL", value);
            }
        }
    }

    #[test]
    fn test_is_configured_requires_token_and_email() {
        let _env = crate::test_support::env_lock();

        // Temporarily clear CFL_EMAIL to ensure test isolation
        let original = std::env::var("CFL_EMAIL").ok();
        unsafe {
            std::env::remove_var("CFL_EMAIL");
        }

        let mut service = ConfigService::new(Config::default());
        assert!(!service.is_configured(true));
        assert!(!service.is_configured(false));

        service.set_email("dev@example.test".to_string());
        assert!(service.is_configured(true));
        assert!(!service.is_configured(false));

        // Restore original state
        unsafe {
            if let Some(value) = original {
                std::env::set_var("CFL_EMAIL", value);
            }
        }
    }

    #[test]
    fn test_save_config_returns_result() {
        let service = ConfigService::new(Config::default());
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = service.save_config(Some(temp_dir.path().join("config.toml")));
        assert!(result.is_ok());
    }
}
