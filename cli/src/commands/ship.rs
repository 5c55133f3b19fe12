//! `logship ship`: configure log shipping for an app.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::Args;

use crate::app::AppContext;
use crate::application::services::config_service;
use crate::application::services::ship_setup::{SetupOptions, run_setup};
use crate::domain::parse_secret_assignment;

/// Arguments for the ship command.
#[derive(Args)]
pub struct ShipArgs {
    /// App whose logs should be shipped
    #[arg(short, long, env = "FLY_APP")]
    pub app: String,

    /// Logging provider slug (see `logship providers`)
    #[arg(long)]
    pub provider: Option<String>,

    /// Provider variable as KEY=VALUE; repeatable
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Never prompt; fail when input is missing
    #[arg(short, long)]
    pub yes: bool,
}

/// Run the ship command.
///
/// # Errors
///
/// Returns an error if input is invalid, no access token is available, or
/// any step of the setup fails.
pub async fn run(app: &AppContext, args: ShipArgs) -> Result<()> {
    let presets = parse_presets(&args.set)?;
    let config = config_service::load_config(&app.config_store)?;

    let api = app.graphql_client(&config)?;
    let machines = app.machines_client(&config)?;
    let prompter = app.prompter();
    let reporter = app.terminal_reporter();

    tracing::info!(app = %args.app, provider = ?args.provider, "starting log shipping setup");

    let report = run_setup(
        &api,
        &machines,
        &prompter,
        &reporter,
        &args.app,
        SetupOptions {
            provider: args.provider.as_deref(),
            presets,
            settings: &config.shipper,
        },
    )
    .await
    .with_context(|| format!("setting up log shipping for {}", args.app))?;
    reporter.finish();

    app.renderer().render_setup(&report)
}

fn parse_presets(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut presets = BTreeMap::new();
    for item in raw {
        let (key, value) = parse_secret_assignment(item)?;
        presets.insert(key, value);
    }
    Ok(presets)
}
