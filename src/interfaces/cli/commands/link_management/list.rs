//! List links command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;

pub async fn list_links(service: &LinkService) -> Result<(), CliError> {
    let links = service
        .list_links()
        .await
        .map_err(|e| CliError::CommandError(format!("Failed to load links: {}", e)))?;

    if links.is_empty() {
        println!("{} No short links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short link list:".bold().green());
    println!();
    for link in &links {
        println!(
            "  {} -> {} {}",
            link.short_code.cyan(),
            link.original_url.blue().underline(),
            format!("({})", link.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
                .dimmed()
                .yellow()
        );
    }
    println!();
    println!(
        "{} Total {} short links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
    Ok(())
}
