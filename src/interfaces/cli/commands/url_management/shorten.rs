//! Shorten URL command

use colored::Colorize;

use super::helpers::{into_cli_result, print_notice};
use crate::interfaces::cli::CliError;
use crate::services::UrlService;
use crate::utils::ShortenInput;

pub async fn shorten_url(
    service: &UrlService,
    url: String,
    ttl: Option<String>,
    alias: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let input = ShortenInput {
        url,
        ttl: ttl.unwrap_or_default(),
        alias: alias.unwrap_or_default(),
    };
    let request = input.to_request()?;

    let outcome = service.shorten(&request).await;
    let notice = outcome.notice.clone();
    let link = into_cli_result(outcome)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&link)?);
        return Ok(());
    }

    if let Some(notice) = notice {
        print_notice(&notice);
    }
    println!(
        "  {} -> {}",
        link.short_url.cyan().bold(),
        link.original_url.blue().underline()
    );
    if let Some(minutes) = request.ttl_minute {
        println!(
            "  {}",
            format!("(expires in {} minutes)", minutes).dimmed().yellow()
        );
    }
    Ok(())
}
