//! 启动前处理：配置、命令行覆盖、日志

use anyhow::{Context, Result};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::config;
use crate::system::{LogTarget, init_logging};

/// Startup options taken from the command line
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// `--config`
    pub config_path: Option<String>,
    /// `--base-url`, replaces `api.base_url`
    pub base_url: Option<String>,
}

/// Load configuration, apply command-line overrides and start logging
///
/// The returned guard flushes buffered log lines on drop, so the caller
/// keeps it until exit.
pub fn client_pre_startup(options: &StartupOptions, target: LogTarget) -> Result<WorkerGuard> {
    let loaded = config::init_config(options.config_path.as_deref())
        .context("Failed to load configuration")?;

    if let Some(base_url) = &options.base_url {
        let mut overridden = (*loaded).clone();
        overridden.api.base_url = base_url.trim().to_string();
        overridden
            .validate()
            .context("Invalid --base-url override")?;
        config::update_config(overridden);
    }

    let config = config::get_config();
    let guard =
        init_logging(&config.logging, target).context("Failed to initialize logging")?;

    debug!(
        "Configuration loaded: api={}, frontend={}, page_size={}",
        config.api.base_url, config.api.frontend_base_url, config.list.page_size
    );
    Ok(guard)
}
