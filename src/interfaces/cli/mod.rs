//! CLI interface module
//!
//! Link commands run directly against the configured store through
//! `LinkService`, so they work whether or not the server is running.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::errors::ShortlinkError;
use crate::services::LinkService;
use crate::storage::StorageFactory;
use commands::{add_link, config_generate, list_links, remove_link, update_link};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<ShortlinkError> for CliError {
    fn from(err: ShortlinkError) -> Self {
        match err {
            ShortlinkError::Validation(msg)
            | ShortlinkError::Conflict(msg)
            | ShortlinkError::NotFound(msg) => CliError::CommandError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Generate doesn't need a DB connection
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return config_generate(output_path, force).await;
    }

    let config = get_config();
    let storage = StorageFactory::create(&config.database)
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;
    let service = LinkService::new(storage.clone(), &config.features);

    let result = match cmd {
        Commands::Add { args } => {
            let (short_code, original_url) = Commands::parse_add_args(&args);
            add_link(&service, short_code, original_url).await
        }
        Commands::List => list_links(&service).await,
        Commands::Update {
            short_code,
            url,
            code,
        } => update_link(&service, short_code, url, code).await,
        Commands::Remove { short_code } => remove_link(&service, short_code).await,
        Commands::Serve => unreachable!("server mode handled in main"),
        Commands::Config { .. } => unreachable!("handled above"),
    };

    if let Err(e) = storage.close().await {
        tracing::warn!("Failed to close storage after CLI command: {}", e);
    }
    result
}
