use thiserror::Error;

/// Application error types organized by layer
#[derive(Error, Debug)]
pub enum AppError {
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// CLI layer errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("{message}")]
    AuthRequired { message: String, hint: String },
}

/// API layer errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Authentication failed (HTTP {status}): {server_message}")]
    Unauthorized {
        status: u16,
        endpoint: String,
        server_message: String,
    },

    #[error("Resource not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("HTTP error {status} ({status_text}) from {endpoint}")]
    Http {
        status: u16,
        status_text: String,
        endpoint: String,
    },

    #[error("Network failure reaching {endpoint}: {message}")]
    Network { endpoint: String, message: String },

    #[error("Failed to parse response from {endpoint}: {message}")]
    Parse { endpoint: String, message: String },
}

/// Configuration layer errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing configuration: {field}")]
    MissingField { field: String, hint: String },
}

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File operation failed at {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Could not determine config directory")]
    ConfigDirNotFound,
}

/// Error severity levels for display formatting
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Low => "💡",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::High => "❌",
        }
    }
}

impl AppError {
    /// Classify error severity for display purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Api(ApiError::Unauthorized { .. }) => ErrorSeverity::High,
            AppError::Api(ApiError::Http { status, .. }) if *status >= 500 => ErrorSeverity::High,
            AppError::Api(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::High,
            // Usage mistakes get the lightest marker
            AppError::Cli(CliError::InvalidArguments(_)) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    /// User-friendly message without internal structure
    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Api(ApiError::Unauthorized { status, .. }) => {
                format!(
                    "Authentication failed (HTTP {status}): the wiki rejected your credentials"
                )
            }
            AppError::Api(ApiError::NotFound { endpoint }) => {
                format!("The wiki returned 404 for {endpoint}")
            }
            AppError::Api(ApiError::Network { message, .. }) => {
                format!("Could not reach the wiki server: {message}")
            }
            AppError::Api(ApiError::Parse { message, .. }) => {
                format!("The server response was not valid JSON: {message}")
            }
            AppError::Cli(CliError::AuthRequired { message, .. }) => message.clone(),
            AppError::Config(ConfigError::MissingField { field, .. }) => {
                format!("Missing configuration: {field}")
            }
            _ => format!("{self}"),
        }
    }

    /// Process exit code for this failure; every error path exits nonzero
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Actionable hint for resolving the error, when one exists
    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::AuthRequired { hint, .. }) => Some(hint.clone()),
            AppError::Config(ConfigError::MissingField { hint, .. }) => Some(hint.clone()),
            AppError::Api(ApiError::Unauthorized { .. }) => Some(
                "Verify CFL_API_TOKEN and CFL_EMAIL. Atlassian API tokens are managed at https://id.atlassian.com/manage-profile/security/api-tokens".to_string(),
            ),
            AppError::Api(ApiError::Network { .. }) => Some(
                "Check your network connection and the configured wiki URL (cfl-cli config show)"
                    .to_string(),
            ),
            AppError::Api(ApiError::NotFound { .. }) => Some(
                "Confirm the wiki base URL points at the site root, e.g. https://your-company.atlassian.net/wiki".to_string(),
            ),
            _ => None,
        }
    }
}
