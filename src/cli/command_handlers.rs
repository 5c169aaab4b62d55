use crate::api::client::ConfluenceClient;
use crate::cli::main_types::{ConfigCommands, OutputFormat, SearchArgs};
use crate::core::mapper::map_results;
use crate::core::query::SearchQuery;
use crate::core::services::config_service::ConfigService;
use crate::display::{
    OperationStatus, ProgressSpinner, SearchTable, display_status, is_interactive_terminal,
    render_csv,
};
use crate::error::{AppError, CliError, ConfigError};
use crate::utils::logging::print_verbose;
use crate::utils::validation::{validate_limit, validate_search_phrase, validate_url};
use std::path::PathBuf;

#[derive(Default)]
pub struct SearchHandler;

impl SearchHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: SearchArgs,
        client: ConfluenceClient,
        verbose: bool,
    ) -> Result<(), AppError> {
        validate_search_phrase(&args.phrase)?;
        validate_limit(args.limit)?;

        let query = SearchQuery::build(&args.phrase, Some(args.limit))?;
        print_verbose(verbose, &format!("Running CQL query: {}", query.cql));

        // Spinner only on an interactive terminal; piped output stays clean
        let mut spinner = if is_interactive_terminal() {
            let mut s = ProgressSpinner::new("Searching wiki pages...".to_string());
            s.start();
            Some(s)
        } else {
            None
        };

        let result = client.search_pages(&query).await;

        if let Some(s) = spinner.as_mut() {
            s.stop(None);
        }

        let response = result?;
        if let Some(size) = response.size {
            print_verbose(verbose, &format!("Server reported {size} matching pages"));
        }

        let hits = map_results(&response, &client.base_url);

        match args.format {
            OutputFormat::Table => print!("{}", SearchTable::new().render(&hits)),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&hits).map_err(|e| {
                    AppError::Cli(CliError::InvalidArguments(format!(
                        "JSON serialization error: {e}"
                    )))
                })?
            ),
            OutputFormat::Csv => print!("{}", render_csv(&hits)),
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
        api_token: Option<String>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command");

                println!("Current Configuration:");
                println!("=====================");

                match config_service.get_url() {
                    Some(url) => println!("Wiki URL: {url}"),
                    None => println!(
                        "Wiki URL: (not set, using default {})",
                        config_service.resolved_url()
                    ),
                }

                match config_service.get_email() {
                    Some(email) => println!("Email: {email}"),
                    None => println!("Email: ❌ Not set"),
                }

                if api_token.is_some() {
                    println!("API Token: ✅ Set (CFL_API_TOKEN)");
                } else {
                    println!("API Token: ❌ Not set");
                }

                let configured = config_service.is_configured(api_token.is_some());
                println!(
                    "\nReady to search: {}",
                    if configured { "yes" } else { "no" }
                );

                Ok(())
            }
            ConfigCommands::Set { url, email } => {
                print_verbose(
                    verbose,
                    &format!("Attempting config set - url: {url:?}, email: {email:?}"),
                );

                let mut updated_fields = Vec::new();

                if let Some(url_value) = url {
                    validate_url(&url_value)?;
                    config_service.set_url(url_value.clone());
                    updated_fields.push(format!("URL to: {url_value}"));
                }

                if let Some(email_value) = email {
                    config_service.set_email(email_value.clone());
                    updated_fields.push(format!("email to: {email_value}"));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --url and/or --email".to_string(),
                    )));
                }

                println!("✅ Set {}", updated_fields.join(", "));
                // Write back to the same file the config was loaded from
                config_service.save_config(config_path)?;
                display_status("Configuration saved", OperationStatus::Success);
                Ok(())
            }
            ConfigCommands::Validate => {
                print_verbose(verbose, "Validating API token and connection");

                let Some(token) = api_token else {
                    display_status(
                        "CFL_API_TOKEN environment variable is not set",
                        OperationStatus::Error,
                    );
                    println!("\nTo authenticate, set your Confluence API token:");
                    println!("  export CFL_API_TOKEN=\"your_api_token\"\n");
                    println!("Create an API token for your Atlassian account:");
                    println!("  https://id.atlassian.com/manage-profile/security/api-tokens");
                    return Err(AppError::Config(ConfigError::MissingField {
                        field: "API token (CFL_API_TOKEN)".to_string(),
                        hint: "Set the CFL_API_TOKEN environment variable".to_string(),
                    }));
                };

                if config_service.get_email().is_none() {
                    display_status(
                        "No account email configured; Basic auth will use a generic username",
                        OperationStatus::Warning,
                    );
                }

                let client = ConfluenceClient::new(
                    config_service.resolved_url(),
                    config_service.get_email(),
                    token,
                )?;

                let mut spinner = if is_interactive_terminal() {
                    let mut s = ProgressSpinner::new("Validating API token...".to_string());
                    s.start();
                    Some(s)
                } else {
                    None
                };

                let result = client.current_user().await;
                if let Some(s) = spinner.as_mut() {
                    s.stop(None);
                }

                match result {
                    Ok(user) => {
                        println!("✅ API token validated successfully");
                        let name = user
                            .display_name
                            .or(user.username)
                            .unwrap_or_else(|| "(unknown)".to_string());
                        println!("\nAuthenticated against: {}", client.base_url);
                        println!("Signed in as: {name}");
                        Ok(())
                    }
                    Err(e) => {
                        println!("❌ API token validation failed");
                        println!("\nPossible causes:");
                        println!("  - API token is invalid or revoked");
                        println!("  - Account email does not match the token");
                        println!("  - Wiki server is unreachable");
                        Err(e.into())
                    }
                }
            }
        }
    }
}
