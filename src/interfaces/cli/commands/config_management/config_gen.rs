//! Generate config command

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::interfaces::cli::CliError;

/// Generate example configuration file
pub async fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 文件已存在且未指定 --force 时交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    let config = crate::config::StaticConfig::default();
    match config.save_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Environment variables (SHORTLINK__SECTION__KEY) override file values".dimmed()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::CommandError(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}
