//! List URLs command

use colored::Colorize;

use super::helpers::{expiry_label, into_cli_result};
use crate::interfaces::cli::CliError;
use crate::listing::{SortState, filter_and_sort};
use crate::services::UrlService;

#[derive(Debug, Clone)]
pub struct ListOptions {
    /// 1-based page number
    pub page: usize,
    pub size: usize,
    pub search: String,
    pub sort: SortState,
    pub json: bool,
}

pub async fn list_urls(service: &UrlService, options: ListOptions) -> Result<(), CliError> {
    if options.page == 0 {
        return Err(CliError::InputError("Page numbers start at 1".to_string()));
    }
    if options.size == 0 {
        return Err(CliError::InputError("Page size must be at least 1".to_string()));
    }

    let records = into_cli_result(service.fetch_page(options.page - 1, options.size).await)?;
    let visible = filter_and_sort(&records, &options.search, options.sort);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    if visible.is_empty() {
        println!("{} No URLs found", "ℹ".bold().blue());
        return Ok(());
    }

    println!(
        "{} {}",
        format!("Shortened URLs, page {}", options.page).bold().green(),
        format!(
            "(sorted by {} {})",
            options.sort.key.label(),
            options.sort.arrow()
        )
        .dimmed()
    );
    println!();
    for record in &visible {
        println!(
            "  {} -> {} {}",
            service.share_link(&record.shortened_url).cyan(),
            record.url.blue().underline(),
            format!(
                "(clicks: {}, expires: {})",
                record.click_count,
                expiry_label(&record.expiration_time)
            )
            .dimmed()
        );
    }
    println!();

    // 满页说明后面可能还有
    if records.len() >= options.size {
        println!(
            "{} More may follow: linkdeck list --page {}",
            "ℹ".bold().blue(),
            options.page + 1
        );
    } else {
        println!(
            "{} Showing {} of {} on the last page",
            "ℹ".bold().blue(),
            visible.len().to_string().green(),
            records.len()
        );
    }
    Ok(())
}
