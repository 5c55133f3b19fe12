//! `logship config`: show and set configuration values.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::application::services::config_service;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value (empty clears `shipper.region`)
        value: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, validated or saved.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Set { key, value } => set_config(app, &key, &value),
    }
}

fn show_config(app: &AppContext) -> Result<()> {
    let config = config_service::load_config(&app.config_store)?;
    let path = app.config_store.path()?;
    app.renderer().render_config(&config, &path)
}

fn set_config(app: &AppContext, key: &str, value: &str) -> Result<()> {
    let config = config_service::set_value(&app.config_store, key, value)?;
    tracing::debug!(key, "configuration updated");
    if app.is_json() {
        let path = app.config_store.path()?;
        return app.renderer().render_config(&config, &path);
    }
    app.output.success(&format!("Set {key} = {value}"));
    Ok(())
}
