//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub async fn remove_link(service: &LinkService, short_code: String) -> Result<(), CliError> {
    service.delete_link(&short_code).await?;

    println!(
        "{} Deleted short link: {}",
        "✓".bold().green(),
        short_code.cyan()
    );
    Ok(())
}
