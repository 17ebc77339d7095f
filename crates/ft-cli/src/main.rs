//! ft - personal finance tracker CLI
//!
//! `login` runs the login flow and stores the session user, `home` and
//! `whoami` show the signed-in view, `logout` ends the session.
//!
//! # Examples
//!
//! ```bash
//! # Log in against the configured endpoint
//! ft login --email a@b.com --password secret
//!
//! # Show the home summary
//! ft home --pretty
//!
//! # End the session
//! ft logout
//! ```

mod cli;
mod commands;
mod context;
mod error;
mod logger;

use crate::{cli::Cli, commands::Commands, context::AppContext};

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration
    let config = match ft_config::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Construct log file path if configured
    let log_file_path = match log_file_path(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logger (before any other logging)
    if let Err(e) = logger::initialize(config.logging.level, log_file_path, config.logging.colored)
    {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting ft v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let context = match AppContext::init(&config).await {
        Ok(context) => context,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&context, cli.command).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Execute the selected command against the app context.
async fn run(context: &AppContext, command: Commands) -> Result<Value, Box<dyn Error>> {
    match command {
        Commands::Login { email, password } => {
            let user = context.login.execute(&email, &password).await?;
            Ok(serde_json::to_value(user)?)
        }

        Commands::Whoami => match context.get_current_user.execute().await? {
            Some(user) => Ok(serde_json::to_value(user)?),
            None => Ok(json!({ "message": "Not logged in" })),
        },

        Commands::Home => {
            let summary = context.home.execute().await?;
            Ok(serde_json::to_value(summary)?)
        }

        Commands::Logout => {
            context.logout.execute().await?;
            Ok(json!({ "logged_out": true }))
        }
    }
}

/// Resolve the log file location inside the configured log directory.
fn log_file_path(config: &ft_config::Config) -> Result<Option<std::path::PathBuf>, Box<dyn Error>> {
    let Some(ref filename) = config.logging.file else {
        return Ok(None);
    };

    let config_dir = ft_config::Config::config_dir()?;
    let log_dir = config_dir.join(&config.logging.dir);

    // Ensure log directory exists
    std::fs::create_dir_all(&log_dir)?;

    Ok(Some(log_dir.join(filename)))
}
