//! 过期状态指示器
//!
//! 根据 expirationTime 显示链接状态（永久、活跃、即将过期、已过期）

use chrono::Utc;
use ratatui::style::Color;

use crate::interfaces::tui::constants::EXPIRING_SOON_HOURS;
use crate::interfaces::tui::constants::colors::Palette;
use crate::listing::parse_expiration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// 无过期时间
    Never,
    Active,
    /// 24 小时内过期
    Expiring,
    Expired,
    /// 无法解析
    Unknown,
}

impl ExpiryStatus {
    /// 从过期时间计算状态，`now_ms` 为毫秒时间戳
    pub fn from_expiration(expiration_time: &str, now_ms: i64) -> Self {
        if expiration_time.trim().is_empty() {
            return Self::Never;
        }
        match parse_expiration(expiration_time) {
            Some(exp) if exp <= now_ms => Self::Expired,
            Some(exp) if exp - now_ms < EXPIRING_SOON_HOURS * 3_600_000 => Self::Expiring,
            Some(_) => Self::Active,
            None => Self::Unknown,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Never => "NEVER",
            Self::Active => "ACTIVE",
            Self::Expiring => "EXPIRING",
            Self::Expired => "EXPIRED",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn color(&self, palette: &Palette) -> Color {
        match self {
            Self::Never | Self::Active => palette.success,
            Self::Expiring => palette.warning,
            Self::Expired => palette.error,
            Self::Unknown => palette.muted,
        }
    }
}

/// 状态 + 原始时间文本
pub struct ExpiryIndicator<'a> {
    pub raw: &'a str,
    pub status: ExpiryStatus,
}

impl<'a> ExpiryIndicator<'a> {
    pub fn new(expiration_time: &'a str) -> Self {
        Self {
            raw: expiration_time,
            status: ExpiryStatus::from_expiration(expiration_time, Utc::now().timestamp_millis()),
        }
    }

    /// Text for the expiry column / detail line
    pub fn text(&self) -> String {
        match self.status {
            ExpiryStatus::Never => "Never".to_string(),
            status => format!("{} [{}]", self.raw.trim(), status.text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_735_725_600_000; // 2025-01-01T10:00:00Z

    #[test]
    fn test_status_from_expiration() {
        assert_eq!(ExpiryStatus::from_expiration("", NOW), ExpiryStatus::Never);
        assert_eq!(
            ExpiryStatus::from_expiration("2024-12-31T10:00:00Z", NOW),
            ExpiryStatus::Expired
        );
        assert_eq!(
            ExpiryStatus::from_expiration("2025-01-01T12:00:00Z", NOW),
            ExpiryStatus::Expiring
        );
        assert_eq!(
            ExpiryStatus::from_expiration("2025-02-01T00:00:00Z", NOW),
            ExpiryStatus::Active
        );
        assert_eq!(ExpiryStatus::from_expiration("soon", NOW), ExpiryStatus::Unknown);
    }
}
