use crate::api::client::ConfluenceClient;
use crate::cli::command_handlers::{ConfigHandler, SearchHandler};
use crate::cli::main_types::Commands;
use crate::core::services::config_service::ConfigService;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use crate::storage::credentials::get_api_token;
use crate::utils::logging::print_verbose;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    // Explicit config file path from --config-dir; None means the default location
    config_path: Option<PathBuf>,
    verbose: bool,
    api_token: Option<String>,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        verbose: bool,
        api_token: Option<String>,
    ) -> Self {
        Self {
            config,
            config_path,
            verbose,
            api_token,
        }
    }

    // Effective API token (CLI arg > env var)
    fn get_effective_api_token(&self) -> Option<String> {
        // CLI argument takes priority
        if let Some(ref token) = self.api_token {
            if !token.is_empty() {
                return Some(token.clone());
            }
        }
        // Fall back to environment variable
        get_api_token()
    }

    // Helper method to create ConfigService with current configuration
    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    // Search requires a token; the base URL falls back to the default
    fn create_client(&self) -> Result<ConfluenceClient, AppError> {
        let service = self.create_config_service();

        let token = self.get_effective_api_token().ok_or_else(|| {
            AppError::Cli(CliError::AuthRequired {
                message: "API token is required".to_string(),
                hint: "Set the CFL_API_TOKEN environment variable or pass --api-token".to_string(),
            })
        })?;

        let email = service.get_email();
        if email.is_none() {
            self.log_verbose("No account email configured, using generic Basic auth username");
        }

        Ok(ConfluenceClient::new(service.resolved_url(), email, token)?)
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Search(args) => {
                let handler = SearchHandler::new();
                let client = self.create_client()?;
                handler.handle(args, client, self.verbose).await
            }
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                let mut config_service = self.create_config_service();
                handler
                    .handle(
                        command,
                        &mut config_service,
                        self.config_path.clone(),
                        self.get_effective_api_token(),
                        self.verbose,
                    )
                    .await
            }
        }
    }
}
