//! Resolve short URL command

use colored::Colorize;

use super::helpers::into_cli_result;
use crate::interfaces::cli::CliError;
use crate::models::identifier_from_input;
use crate::services::UrlService;

pub async fn resolve_url(service: &UrlService, target: &str) -> Result<(), CliError> {
    let identifier = identifier_from_input(target).to_string();
    let destination = into_cli_result(service.resolve(target).await)?;

    println!(
        "{} {} -> {}",
        "→".bold().cyan(),
        service.share_link(&identifier).cyan(),
        destination.blue().underline()
    );
    Ok(())
}
