//! Wire types shared by the API client, the CLI and the TUI

use serde::{Deserialize, Deserializer, Serialize};

/// One shortened URL as returned by `GET {base}/all`
///
/// `shortened_url` is the unique key. Records are never edited locally; a
/// refresh replaces the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    pub shortened_url: String,
    pub url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub click_count: String,
    /// ISO datetime, empty when the link never expires
    #[serde(default, deserialize_with = "lenient_string")]
    pub expiration_time: String,
}

impl UrlRecord {
    pub fn new(
        shortened_url: impl Into<String>,
        url: impl Into<String>,
        click_count: impl Into<String>,
        expiration_time: impl Into<String>,
    ) -> Self {
        Self {
            shortened_url: shortened_url.into(),
            url: url.into(),
            click_count: click_count.into(),
            expiration_time: expiration_time.into(),
        }
    }

    pub fn has_expiration(&self) -> bool {
        !self.expiration_time.trim().is_empty()
    }
}

/// Body of `POST {base}`
///
/// Empty optional inputs are sent as explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationRequest {
    pub url: String,
    pub ttl_minute: Option<u64>,
    pub custom_shortened_url: Option<String>,
}

impl CreationRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ttl_minute: None,
            custom_shortened_url: None,
        }
    }

    pub fn with_ttl(mut self, minutes: Option<u64>) -> Self {
        self.ttl_minute = minutes;
        self
    }

    pub fn with_alias(mut self, alias: Option<String>) -> Self {
        self.custom_shortened_url = alias.filter(|a| !a.is_empty());
        self
    }
}

/// Result of a successful create: the identifier and the shareable link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedLink {
    pub identifier: String,
    pub short_url: String,
    pub original_url: String,
}

/// Build the shareable link for an identifier
pub fn short_link(frontend_base: &str, identifier: &str) -> String {
    format!("{}/redirect/{}", frontend_base.trim_end_matches('/'), identifier)
}

/// Extract the identifier from either a bare id or a `.../redirect/<id>` link
pub fn identifier_from_input(input: &str) -> &str {
    let trimmed = input.trim().trim_end_matches('/');
    match trimmed.rfind("/redirect/") {
        Some(pos) => &trimmed[pos + "/redirect/".len()..],
        None => trimmed.rsplit('/').next().unwrap_or(trimmed),
    }
}

// clickCount 可能是字符串或数字，expirationTime 可能是 null
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record_with_numeric_clicks_and_null_expiry() {
        let json = r#"{"shortenedUrl":"abc","url":"https://a.com","clickCount":7,"expirationTime":null}"#;
        let record: UrlRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.click_count, "7");
        assert_eq!(record.expiration_time, "");
        assert!(!record.has_expiration());
    }

    #[test]
    fn test_deserialize_record_missing_optional_fields() {
        let json = r#"{"shortenedUrl":"abc","url":"https://a.com"}"#;
        let record: UrlRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.click_count, "");
        assert_eq!(record.expiration_time, "");
    }

    #[test]
    fn test_creation_request_serializes_explicit_nulls() {
        let body = serde_json::to_value(CreationRequest::new("https://a.com")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"url": "https://a.com", "ttlMinute": null, "customShortenedUrl": null})
        );
    }

    #[test]
    fn test_with_alias_drops_empty() {
        let req = CreationRequest::new("https://a.com").with_alias(Some(String::new()));
        assert!(req.custom_shortened_url.is_none());
    }

    #[test]
    fn test_short_link_trims_trailing_slash() {
        assert_eq!(short_link("http://x.io/", "abc"), "http://x.io/redirect/abc");
    }

    #[test]
    fn test_identifier_from_input() {
        assert_eq!(identifier_from_input("abc"), "abc");
        assert_eq!(identifier_from_input("http://x.io/redirect/abc"), "abc");
        assert_eq!(identifier_from_input("http://x.io/redirect/abc/"), "abc");
    }
}
