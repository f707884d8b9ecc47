use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks. Falls back to loading the default file when
/// nothing was initialised yet.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(None)))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `path` (or `linkdeck.toml` when absent) plus `LINKDECK__*`
/// environment overrides.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    let config = StaticConfig::load_from(path)?;
    Ok(update_config(config))
}

/// Replace the global configuration, e.g. after applying CLI overrides
pub fn update_config(config: StaticConfig) -> Arc<StaticConfig> {
    let config = Arc::new(config);
    match CONFIG.get() {
        Some(slot) => slot.store(config.clone()),
        None => {
            let slot = CONFIG.get_or_init(|| ArcSwap::new(config.clone()));
            slot.store(config.clone());
        }
    }
    config
}
