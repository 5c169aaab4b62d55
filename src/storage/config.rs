//! Configuration management
//!
//! Simple configuration with wiki URL and account email stored in a config
//! file or environment variables.
//! Priority: CFL_URL / CFL_EMAIL environment variables > config.toml

use super::Result;
use crate::error::StorageError;
use dirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL used when neither CFL_URL nor the config file provides one
pub const DEFAULT_BASE_URL: &str = "https://your-company.atlassian.net/wiki";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    /// Confluence site base URL, including the /wiki context path
    pub url: Option<String>,
    /// Atlassian account email paired with the API token
    pub email: Option<String>,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {e}"),
            })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {e}"),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("cfl-cli");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    /// Get URL, letting the environment override the file
    pub fn get_url(&self) -> Option<String> {
        std::env::var("CFL_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.url.clone())
    }

    /// Get email, letting the environment override the file
    pub fn get_email(&self) -> Option<String> {
        std::env::var("CFL_EMAIL")
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.email.clone())
    }

    /// Set URL
    pub fn set_url(&mut self, url: String) {
        self.url = Some(url);
    }

    /// Set email
    pub fn set_email(&mut self, email: String) {
        self.email = Some(email);
    }
}
