use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cfl-cli")]
#[command(about = "Command line interface tool for searching Confluence wiki pages")]
#[command(version)]
#[command(after_help = "Examples:
  cfl-cli search \"release checklist\"         # Search wiki pages
  cfl-cli search \"onboarding\" --limit 5      # Show the first 5 matches
  cfl-cli search \"api docs\" --format json    # Output results as JSON
  cfl-cli config show                        # Show current configuration
  cfl-cli config validate                    # Validate token and connection

Environment Variables:
  CFL_API_TOKEN   Confluence API token (required for authentication)
  CFL_EMAIL       Atlassian account email paired with the token
  CFL_URL         Confluence base URL, e.g. https://your-company.atlassian.net/wiki")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Confluence API token for authentication
    #[arg(long, global = true, env = "CFL_API_TOKEN")]
    pub api_token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search wiki pages matching a phrase
    Search(SearchArgs),
    /// Configuration management (show, set, validate)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Phrase to search for in page text
    pub phrase: String,

    /// Maximum number of results to display
    #[arg(long, default_value = "10")]
    pub limit: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  cfl-cli config set --url https://your-company.atlassian.net/wiki
  cfl-cli config set --email user@example.com")]
    Set {
        /// Confluence base URL
        #[arg(long)]
        url: Option<String>,
        /// Email address paired with the API token
        #[arg(long)]
        email: Option<String>,
    },
    /// Validate the API token against the server
    Validate,
}
