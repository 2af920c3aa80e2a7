//! Update link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{LinkService, UpdateLinkRequest};

pub async fn update_link(
    service: &LinkService,
    short_code: String,
    original_url: Option<String>,
    new_short_code: Option<String>,
) -> Result<(), CliError> {
    if original_url.is_none() && new_short_code.is_none() {
        return Err(CliError::ParseError(
            "Nothing to update, pass --url and/or --code".to_string(),
        ));
    }

    let link = service
        .update_link(
            &short_code,
            UpdateLinkRequest {
                original_url,
                new_short_url: new_short_code,
            },
        )
        .await?;

    if link.short_code != short_code {
        println!(
            "{} Renamed short link: {} -> {}",
            "✓".bold().green(),
            short_code.cyan(),
            link.short_code.cyan()
        );
    }

    println!(
        "{} Updated short link: {} -> {}",
        "✓".bold().green(),
        link.short_code.cyan(),
        link.original_url.blue().underline()
    );
    Ok(())
}
