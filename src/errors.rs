use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LinkdeckError {
    RateLimited,
    Api { status: u16, message: String },
    Transport(String),
    Validation(String),
    Serialization(String),
    Config(String),
    FileOperation(String),
    NotFound(String),
    Clipboard(String),
}

impl LinkdeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkdeckError::RateLimited => "E001",
            LinkdeckError::Api { .. } => "E002",
            LinkdeckError::Transport(_) => "E003",
            LinkdeckError::Validation(_) => "E004",
            LinkdeckError::Serialization(_) => "E005",
            LinkdeckError::Config(_) => "E006",
            LinkdeckError::FileOperation(_) => "E007",
            LinkdeckError::NotFound(_) => "E008",
            LinkdeckError::Clipboard(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkdeckError::RateLimited => "Rate Limited",
            LinkdeckError::Api { .. } => "API Error",
            LinkdeckError::Transport(_) => "Connection Error",
            LinkdeckError::Validation(_) => "Validation Error",
            LinkdeckError::Serialization(_) => "Serialization Error",
            LinkdeckError::Config(_) => "Configuration Error",
            LinkdeckError::FileOperation(_) => "File Operation Error",
            LinkdeckError::NotFound(_) => "Resource Not Found",
            LinkdeckError::Clipboard(_) => "Clipboard Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkdeckError::RateLimited => "Rate limit exceeded. Please try again later.",
            LinkdeckError::Api { message, .. } => message,
            LinkdeckError::Transport(msg) => msg,
            LinkdeckError::Validation(msg) => msg,
            LinkdeckError::Serialization(msg) => msg,
            LinkdeckError::Config(msg) => msg,
            LinkdeckError::FileOperation(msg) => msg,
            LinkdeckError::NotFound(msg) => msg,
            LinkdeckError::Clipboard(msg) => msg,
        }
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkdeckError::RateLimited => Some(429),
            LinkdeckError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkdeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkdeckError {}

// 便捷的构造函数
impl LinkdeckError {
    pub fn api<T: Into<String>>(status: u16, msg: T) -> Self {
        LinkdeckError::Api {
            status,
            message: msg.into(),
        }
    }

    pub fn transport<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Transport(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Validation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::FileOperation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::NotFound(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        LinkdeckError::Clipboard(msg.into())
    }
}

impl From<std::io::Error> for LinkdeckError {
    fn from(err: std::io::Error) -> Self {
        LinkdeckError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkdeckError {
    fn from(err: serde_json::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for LinkdeckError {
    fn from(err: toml::de::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for LinkdeckError {
    fn from(err: toml::ser::Error) -> Self {
        LinkdeckError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for LinkdeckError {
    fn from(err: config::ConfigError) -> Self {
        LinkdeckError::Config(err.to_string())
    }
}

impl From<ureq::Error> for LinkdeckError {
    fn from(err: ureq::Error) -> Self {
        LinkdeckError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkdeckError>;
