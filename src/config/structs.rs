use serde::{Deserialize, Serialize};

use crate::errors::{LinkdeckError, Result};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "linkdeck.toml";

/// 环境变量前缀，例如 LINKDECK__API__BASE_URL
pub const ENV_PREFIX: &str = "LINKDECK";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// - api: 后端地址、前端地址、超时
/// - list: 分页大小
/// - ui: 提示消息时长、刷新间隔、状态文件
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StaticConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// An explicitly given path must exist; the default file is optional.
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_FILE, false),
        };

        let settings = Config::builder()
            .add_source(File::with_name(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: StaticConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load_from`](Self::load_from) but falls back to defaults
    pub fn load(path: Option<&str>) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(LinkdeckError::config("api.base_url must not be empty"));
        }
        if self.list.page_size == 0 {
            return Err(LinkdeckError::config("list.page_size must be at least 1"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(LinkdeckError::config(format!(
                "logging.format must be 'text' or 'json', got '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        toml::to_string_pretty(&Self::default())
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base of the REST API, e.g. `http://localhost:8000/api`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public origin that serves `/redirect/<id>`
    #[serde(default = "default_frontend_base_url")]
    pub frontend_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// 列表配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// 界面配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_message_ttl_ms")]
    pub message_ttl_ms: u64,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Empty selects the platform data directory
    #[serde(default)]
    pub state_file: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    /// Empty means console for the CLI and a data-dir file for the TUI
    #[serde(default)]
    pub file: String,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default)]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_frontend_base_url() -> String {
    "http://localhost".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> usize {
    10
}

fn default_message_ttl_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

// ============================================================
// Default implementations
// ============================================================

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            frontend_base_url: default_frontend_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_ttl_ms: default_message_ttl_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            state_file: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: String::new(),
            max_backups: default_max_backups(),
            enable_rotation: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StaticConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.ui.message_ttl_ms, 3000);
    }

    #[test]
    fn test_sample_config_round_trips() {
        let sample = StaticConfig::generate_sample_config();
        let parsed: StaticConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, StaticConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let mut config = StaticConfig::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(LinkdeckError::Config(_))));
    }
}
