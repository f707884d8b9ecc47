//! URL management service
//!
//! Runs one request per user action and turns the result into what the
//! user sees: an optional transient message plus an action-log line. Shared
//! by the CLI and the TUI so both report identical texts.

use std::sync::Arc;

use tracing::{info, warn};

use crate::client::{HttpUrlApi, UrlApi, json_error_message};
use crate::errors::{LinkdeckError, Result};
use crate::models::{CreationRequest, ShortenedLink, UrlRecord, identifier_from_input, short_link};

pub const RATE_LIMIT_MESSAGE: &str = "Rate limit exceeded. Please try again later.";

/// 消息级别（决定显示颜色）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: MessageLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }
}

/// Result of one flow together with its user-facing reporting
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOutcome<T> {
    pub result: Result<T>,
    pub notice: Option<Notice>,
    pub action: String,
}

impl<T> FlowOutcome<T> {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Verb-specific wording of the failure texts
struct FlowTexts {
    /// "fetch URLs", "delete URL"
    verb: &'static str,
    /// "fetching URLs", "deleting URL"
    gerund: &'static str,
}

const LIST_TEXTS: FlowTexts = FlowTexts {
    verb: "fetch URLs",
    gerund: "fetching URLs",
};
const DELETE_TEXTS: FlowTexts = FlowTexts {
    verb: "delete URL",
    gerund: "deleting URL",
};
const RESOLVE_TEXTS: FlowTexts = FlowTexts {
    verb: "resolve URL",
    gerund: "resolving URL",
};

impl FlowTexts {
    /// list / delete / resolve share one failure layout
    fn failure<T>(&self, err: LinkdeckError) -> FlowOutcome<T> {
        let (notice, action) = match &err {
            LinkdeckError::RateLimited => (
                RATE_LIMIT_MESSAGE.to_string(),
                format!("Failed to {}: Rate limit exceeded", self.verb),
            ),
            LinkdeckError::Api { status, message } => {
                // JSON 错误体只显示 error 字段
                let detail = json_error_message(message).unwrap_or_else(|| message.clone());
                (
                    format!("Error {}: {} - {}", self.gerund, status, detail),
                    format!("Failed to {}: {}", self.verb, status),
                )
            }
            other => (
                format!("Error {}: {}", self.gerund, other.message()),
                format!("Failed to {}: {}", self.verb, other.message()),
            ),
        };
        warn!("{}", action);
        FlowOutcome {
            result: Err(err),
            notice: Some(Notice::error(notice)),
            action,
        }
    }
}

/// Create / list / delete / resolve flows over a [`UrlApi`]
#[derive(Clone)]
pub struct UrlService {
    api: Arc<dyn UrlApi>,
    frontend_base: String,
}

impl UrlService {
    pub fn new(api: Arc<dyn UrlApi>, frontend_base: impl Into<String>) -> Self {
        Self {
            api,
            frontend_base: frontend_base.into(),
        }
    }

    /// HTTP backend and frontend origin from the global configuration
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(
            Arc::new(HttpUrlApi::from_config()),
            config.api.frontend_base_url.clone(),
        )
    }

    pub fn api_name(&self) -> &'static str {
        self.api.name()
    }

    pub fn frontend_base(&self) -> &str {
        &self.frontend_base
    }

    /// Shareable `{frontend}/redirect/{id}` link
    pub fn share_link(&self, identifier: &str) -> String {
        short_link(&self.frontend_base, identifier)
    }

    /// Fetch one page (`page` is zero-based)
    pub async fn fetch_page(&self, page: usize, size: usize) -> FlowOutcome<Vec<UrlRecord>> {
        match self.api.list_page(page, size).await {
            Ok(records) => {
                let action = format!("Fetched URLs (page {})", page + 1);
                info!("{} - {} records", action, records.len());
                FlowOutcome {
                    result: Ok(records),
                    notice: None,
                    action,
                }
            }
            Err(e) => LIST_TEXTS.failure(e),
        }
    }

    pub async fn shorten(&self, request: &CreationRequest) -> FlowOutcome<ShortenedLink> {
        match self.api.create(request).await {
            Ok(identifier) => {
                let link = ShortenedLink {
                    short_url: self.share_link(&identifier),
                    identifier,
                    original_url: request.url.clone(),
                };
                let action = format!("Shortened URL: {}", request.url);
                info!("{} -> {}", action, link.short_url);
                FlowOutcome {
                    result: Ok(link),
                    notice: Some(Notice::success("URL shortened successfully!")),
                    action,
                }
            }
            Err(err) => {
                let (notice, action) = match &err {
                    LinkdeckError::RateLimited => (
                        RATE_LIMIT_MESSAGE.to_string(),
                        "Failed to shorten URL: Rate limit exceeded".to_string(),
                    ),
                    LinkdeckError::Api { status, message } => {
                        let notice = match json_error_message(message) {
                            Some(detail) => format!("Error: {}", detail),
                            None => format!("Error shortening URL: {} - {}", status, message),
                        };
                        (notice, format!("Failed to shorten URL: {}", status))
                    }
                    other => (
                        format!("Error connecting to server: {}", other.message()),
                        format!("Failed to shorten URL: {}", other.message()),
                    ),
                };
                warn!("{}", action);
                FlowOutcome {
                    result: Err(err),
                    notice: Some(Notice::error(notice)),
                    action,
                }
            }
        }
    }

    pub async fn delete(&self, shortened_url: &str) -> FlowOutcome<()> {
        match self.api.delete(shortened_url).await {
            Ok(()) => {
                let action = format!("Deleted URL: {}", shortened_url);
                info!("{}", action);
                FlowOutcome {
                    result: Ok(()),
                    notice: Some(Notice::success("URL deleted successfully")),
                    action,
                }
            }
            Err(e) => DELETE_TEXTS.failure(e),
        }
    }

    /// Resolve a bare identifier or a full `.../redirect/<id>` link
    pub async fn resolve(&self, input: &str) -> FlowOutcome<String> {
        let identifier = identifier_from_input(input);
        if identifier.is_empty() {
            return RESOLVE_TEXTS.failure(LinkdeckError::validation("Short URL is required"));
        }

        match self.api.resolve(identifier).await {
            Ok(target) => {
                let action = format!("Resolved {} -> {}", identifier, target);
                info!("{}", action);
                let notice = Notice::info(format!("Redirects to {}", target));
                FlowOutcome {
                    result: Ok(target),
                    notice: Some(notice),
                    action,
                }
            }
            Err(e) => RESOLVE_TEXTS.failure(e),
        }
    }
}
