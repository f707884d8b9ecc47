//! 输入校验
//!
//! Checks the shorten form before anything is sent: target URL, custom
//! alias and TTL. Errors are reported per field.

use std::fmt;

use url::Url;

use crate::models::CreationRequest;

/// 自定义别名最大长度
pub const MAX_ALIAS_LENGTH: usize = 64;

/// 危险协议列表
const DANGEROUS_SCHEMES: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// Form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Url,
    Ttl,
    Alias,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    EmptyUrl,
    InvalidScheme(String),
    DangerousScheme(String),
    MalformedUrl(String),
    AliasTooLong(usize),
    AliasCharacters,
    InvalidTtl(String),
}

impl InputError {
    pub fn field(&self) -> InputField {
        match self {
            Self::EmptyUrl
            | Self::InvalidScheme(_)
            | Self::DangerousScheme(_)
            | Self::MalformedUrl(_) => InputField::Url,
            Self::AliasTooLong(_) | Self::AliasCharacters => InputField::Alias,
            Self::InvalidTtl(_) => InputField::Ttl,
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL is required"),
            Self::InvalidScheme(scheme) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                scheme
            ),
            Self::DangerousScheme(scheme) => write!(f, "Dangerous protocol blocked: {}", scheme),
            Self::MalformedUrl(msg) => write!(f, "Invalid URL format: {}", msg),
            Self::AliasTooLong(max) => write!(f, "Alias too long (max {} chars)", max),
            Self::AliasCharacters => {
                write!(f, "Only letters, digits, dash and underscore allowed")
            }
            Self::InvalidTtl(raw) => {
                write!(f, "TTL must be a positive number of minutes, got '{}'", raw)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// 验证目标 URL
///
/// 1. 不为空
/// 2. 不是危险协议（javascript:, data:, file: 等）
/// 3. 必须是 http:// 或 https://
/// 4. 能被解析
pub fn validate_url(raw: &str) -> Result<(), InputError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(InputError::EmptyUrl);
    }

    let lower = url.to_lowercase();
    if let Some(scheme) = DANGEROUS_SCHEMES.iter().find(|s| lower.starts_with(**s)) {
        return Err(InputError::DangerousScheme(scheme.to_string()));
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        let scheme = lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(InputError::InvalidScheme(scheme));
    }

    Url::parse(url).map_err(|e| InputError::MalformedUrl(e.to_string()))?;
    Ok(())
}

/// Empty alias is allowed and means "let the server pick"
pub fn validate_alias(raw: &str) -> Result<Option<String>, InputError> {
    let alias = raw.trim();
    if alias.is_empty() {
        return Ok(None);
    }
    if alias.chars().count() > MAX_ALIAS_LENGTH {
        return Err(InputError::AliasTooLong(MAX_ALIAS_LENGTH));
    }
    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
    {
        return Err(InputError::AliasCharacters);
    }
    Ok(Some(alias.to_string()))
}

/// Empty TTL means no expiration
pub fn parse_ttl(raw: &str) -> Result<Option<u64>, InputError> {
    let ttl = raw.trim();
    if ttl.is_empty() {
        return Ok(None);
    }
    match ttl.parse::<u64>() {
        Ok(minutes) if minutes > 0 => Ok(Some(minutes)),
        _ => Err(InputError::InvalidTtl(ttl.to_string())),
    }
}

/// Raw text of the shorten form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortenInput {
    pub url: String,
    pub ttl: String,
    pub alias: String,
}

impl ShortenInput {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Every field error at once, in form order
    pub fn errors(&self) -> Vec<InputError> {
        let mut errors = Vec::new();
        if let Err(e) = validate_url(&self.url) {
            errors.push(e);
        }
        if let Err(e) = parse_ttl(&self.ttl) {
            errors.push(e);
        }
        if let Err(e) = validate_alias(&self.alias) {
            errors.push(e);
        }
        errors
    }

    /// Build the request body, or the first error found
    pub fn to_request(&self) -> Result<CreationRequest, InputError> {
        validate_url(&self.url)?;
        let ttl = parse_ttl(&self.ttl)?;
        let alias = validate_alias(&self.alias)?;
        Ok(CreationRequest::new(self.url.trim())
            .with_ttl(ttl)
            .with_alias(alias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1").is_ok());
        assert!(validate_url("HTTPS://example.com").is_ok());
    }

    #[test]
    fn test_dangerous_and_invalid_schemes() {
        assert!(matches!(
            validate_url("JavaScript:alert(1)"),
            Err(InputError::DangerousScheme(_))
        ));
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(InputError::InvalidScheme(_))
        ));
        assert_eq!(validate_url("  "), Err(InputError::EmptyUrl));
    }

    #[test]
    fn test_alias_rules() {
        assert_eq!(validate_alias(""), Ok(None));
        assert_eq!(validate_alias("my-link_1"), Ok(Some("my-link_1".to_string())));
        assert_eq!(validate_alias("a/b"), Err(InputError::AliasCharacters));
        assert_eq!(
            validate_alias(&"x".repeat(MAX_ALIAS_LENGTH + 1)),
            Err(InputError::AliasTooLong(MAX_ALIAS_LENGTH))
        );
    }

    #[test]
    fn test_ttl_rules() {
        assert_eq!(parse_ttl(""), Ok(None));
        assert_eq!(parse_ttl(" 60 "), Ok(Some(60)));
        assert!(parse_ttl("0").is_err());
        assert!(parse_ttl("-5").is_err());
        assert!(parse_ttl("1h").is_err());
    }

    #[test]
    fn test_shorten_input_to_request() {
        let input = ShortenInput {
            url: " https://example.com ".to_string(),
            ttl: "30".to_string(),
            alias: String::new(),
        };
        let request = input.to_request().unwrap();
        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.ttl_minute, Some(30));
        assert_eq!(request.custom_shortened_url, None);
    }

    #[test]
    fn test_shorten_input_collects_all_errors() {
        let input = ShortenInput {
            url: String::new(),
            ttl: "abc".to_string(),
            alias: "bad alias".to_string(),
        };
        let fields: Vec<InputField> = input.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec![InputField::Url, InputField::Ttl, InputField::Alias]);
    }
}
