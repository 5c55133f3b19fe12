//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::LogshipConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the stored configuration cannot be read.
pub fn load_config(store: &impl ConfigStore) -> Result<LogshipConfig> {
    store.load()
}

/// Validate and apply `key = value`, then persist the configuration.
///
/// # Errors
///
/// Returns an error if validation fails or the configuration cannot be
/// loaded or saved.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<LogshipConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
