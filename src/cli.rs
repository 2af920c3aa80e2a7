//! Command-line interface definitions using clap
//!
//! Without a subcommand the binary starts the HTTP server.

use clap::{Parser, Subcommand};

/// shortlink - a small URL shortener service
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(version)]
#[command(about = "A small URL shortener service", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Add a short link
    ///
    /// Usage: add [SHORT_CODE] <ORIGINAL_URL>
    /// - If only URL provided, generates random short code
    /// - If both provided, uses specified short code
    Add {
        /// Positional args: [short_code] <original_url>
        #[arg(required = true, num_args = 1..=2)]
        args: Vec<String>,
    },

    /// List all short links
    List,

    /// Update a short link
    Update {
        /// Short code to update
        short_code: String,

        /// New original URL
        #[arg(long)]
        url: Option<String>,

        /// New short code
        #[arg(long)]
        code: Option<String>,
    },

    /// Remove a short link
    Remove {
        /// Short code to remove
        short_code: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}

impl Commands {
    /// Parse add command args into (short_code, original_url)
    pub fn parse_add_args(args: &[String]) -> (Option<String>, String) {
        match args {
            [url] => (None, url.clone()),
            [code, url, ..] => (Some(code.clone()), url.clone()),
            [] => unreachable!("clap ensures 1-2 args"),
        }
    }
}
