//! Delete URL command

use super::helpers::{into_cli_result, print_notice};
use crate::interfaces::cli::CliError;
use crate::services::UrlService;

pub async fn delete_url(service: &UrlService, short_id: &str) -> Result<(), CliError> {
    let short_id = short_id.trim();
    if short_id.is_empty() {
        return Err(CliError::InputError("Short URL is required".to_string()));
    }

    let outcome = service.delete(short_id).await;
    let notice = outcome.notice.clone();
    into_cli_result(outcome)?;

    if let Some(notice) = notice {
        print_notice(&notice);
    }
    Ok(())
}
