pub mod validation;

pub use validation::{
    InputError, InputField, MAX_ALIAS_LENGTH, ShortenInput, parse_ttl, validate_alias,
    validate_url,
};

/// 截断过长文本，保留前缀并追加省略号
pub fn truncate_display(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let prefix: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short", 10), "short");
        assert_eq!(truncate_display("https://example.com/long", 10), "https:/...");
        assert_eq!(truncate_display("abcdef", 2), "ab");
    }
}
