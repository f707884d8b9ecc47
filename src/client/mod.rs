//! Client layer for the shortener REST API
//!
//! CLI/TUI → `UrlService` → `UrlApi` → backend
//!
//! The trait is the seam between user-facing flows and the transport:
//! `HttpUrlApi` talks HTTP through `ureq`, tests plug in an in-memory fake.
//!
//! # Status classification
//!
//! - 2xx → success
//! - 429 → `LinkdeckError::RateLimited`
//! - other → `LinkdeckError::Api { status, message }` with the raw body

mod http;

pub use http::HttpUrlApi;

use async_trait::async_trait;

use crate::errors::{LinkdeckError, Result};
use crate::models::{CreationRequest, UrlRecord};

/// Backend operations used by the client
#[async_trait]
pub trait UrlApi: Send + Sync {
    /// `POST {base}`; returns the new short identifier
    async fn create(&self, request: &CreationRequest) -> Result<String>;

    /// `GET {base}/all?page=&size=`
    async fn list_page(&self, page: usize, size: usize) -> Result<Vec<UrlRecord>>;

    /// `DELETE {base}/{shortened_url}`
    async fn delete(&self, shortened_url: &str) -> Result<()>;

    /// `GET {base}/{shortened_url}` without following redirects; returns the target
    async fn resolve(&self, shortened_url: &str) -> Result<String>;

    /// 实现名称（用于日志）
    fn name(&self) -> &'static str;
}

/// Status, `Location` header and body of a finished request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub location: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            location: None,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// Turn non-2xx responses into errors, pass 2xx through
pub fn check_status(response: RawResponse) -> Result<RawResponse> {
    match response.status {
        429 => Err(LinkdeckError::RateLimited),
        _ if response.is_success() => Ok(response),
        status => Err(LinkdeckError::api(status, response.body)),
    }
}

/// Decide the target of a redirect lookup
///
/// 3xx uses `Location`, 2xx the trimmed body, 404 is reported as not found.
pub fn resolve_target(shortened_url: &str, response: RawResponse) -> Result<String> {
    if response.status == 404 {
        return Err(LinkdeckError::not_found(format!(
            "Short URL not found: {}",
            shortened_url
        )));
    }
    if response.is_redirect() {
        return response
            .location
            .filter(|l| !l.trim().is_empty())
            .ok_or_else(|| {
                LinkdeckError::api(response.status, "Redirect response without Location header")
            });
    }

    let response = check_status(response)?;
    let target = response.body.trim();
    if target.is_empty() {
        return Err(LinkdeckError::not_found(format!(
            "Short URL not found: {}",
            shortened_url
        )));
    }
    Ok(target.to_string())
}

/// Best-effort `error` field of a JSON error body
///
/// `None` when the body is not JSON at all or is JSON `null`; any other JSON
/// body without a string `error` field falls back to the raw text.
pub fn json_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if value.is_null() {
        return None;
    }
    Some(
        value
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .map(String::from)
            .unwrap_or_else(|| body.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_classification() {
        assert!(check_status(RawResponse::new(201, "abc")).is_ok());
        assert_eq!(
            check_status(RawResponse::new(429, "slow down")),
            Err(LinkdeckError::RateLimited)
        );
        assert_eq!(
            check_status(RawResponse::new(500, "boom")),
            Err(LinkdeckError::api(500, "boom"))
        );
    }

    #[test]
    fn test_json_error_message() {
        assert_eq!(
            json_error_message(r#"{"error":"Alias taken"}"#),
            Some("Alias taken".to_string())
        );
        assert_eq!(
            json_error_message(r#"{"detail":"x"}"#),
            Some(r#"{"detail":"x"}"#.to_string())
        );
        assert_eq!(json_error_message("Internal Server Error"), None);
        assert_eq!(json_error_message("null"), None);
        assert_eq!(json_error_message(" null \n"), None);
        assert_eq!(json_error_message("42"), Some("42".to_string()));
    }

    #[test]
    fn test_resolve_target_variants() {
        let redirect = RawResponse {
            status: 302,
            location: Some("https://example.com".to_string()),
            body: String::new(),
        };
        assert_eq!(resolve_target("abc", redirect).unwrap(), "https://example.com");
        assert_eq!(
            resolve_target("abc", RawResponse::new(200, " https://a.com \n")).unwrap(),
            "https://a.com"
        );
        assert!(matches!(
            resolve_target("abc", RawResponse::new(404, "")),
            Err(LinkdeckError::NotFound(_))
        ));
        assert_eq!(
            resolve_target("abc", RawResponse::new(429, "")),
            Err(LinkdeckError::RateLimited)
        );
    }
}
