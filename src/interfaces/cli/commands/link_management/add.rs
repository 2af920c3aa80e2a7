//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{CreateLinkRequest, LinkService};

pub async fn add_link(
    service: &LinkService,
    short_code: Option<String>,
    original_url: String,
) -> Result<(), CliError> {
    let result = service
        .create_link(CreateLinkRequest {
            original_url,
            custom_short_url: short_code,
        })
        .await?;

    if result.generated_code {
        println!(
            "{} Generated random code: {}",
            "ℹ".bold().blue(),
            result.link.short_code.magenta()
        );
    }

    println!(
        "{} Added short link: {} -> {}",
        "✓".bold().green(),
        result.link.short_code.cyan(),
        result.link.original_url.blue().underline()
    );

    Ok(())
}
