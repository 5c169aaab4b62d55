use cfl_cli::cli::dispatcher::Dispatcher;
use cfl_cli::cli::main_types::Cli;
use cfl_cli::storage::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load Config
    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    if cli.verbose {
        println!("Verbose mode is enabled");

        if let Some(config_dir) = &cli.config_dir {
            println!("Using config directory: {}", config_dir);
        }

        if cli.api_token.as_ref().is_some_and(|token| !token.is_empty()) {
            println!("Using API token provided via env or command line");
        }
    }

    // Create dispatcher
    let dispatcher = Dispatcher::new(config, config_path, cli.verbose, cli.api_token);

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} {}", e.severity().emoji(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("💡 Hint: {}", hint);
        }
        std::process::exit(e.exit_code());
    }

    Ok(())
}
