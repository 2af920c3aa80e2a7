use std::sync::{Arc, OnceLock};

use super::StaticConfig;

static CONFIG: OnceLock<Arc<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get()
        .expect("Config not initialized. Call init_config_from() first.")
        .clone()
}

/// Initialize the global configuration from an explicit TOML path
///
/// Has no effect if the configuration was already initialized; the existing
/// instance is returned in that case.
pub fn init_config_from(path: &str) -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| Arc::new(StaticConfig::load_from(path)))
        .clone()
}
