//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::ship_setup::SetupReport;
use crate::application::services::shipper_app::ShipperAppOutcome;
use crate::application::services::shipper_machine::MachineOutcome;
use crate::domain::{LogshipConfig, Provider};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("logship {version}");
    }

    /// Render the provider registry as a table.
    pub fn render_providers(&self, providers: &[Provider]) {
        if self.ctx.quiet {
            return;
        }
        println!("Log providers:\n");
        for p in providers {
            let marker = if p.auto {
                format!("  {}", "[auto]".style(self.ctx.styles.auto))
            } else {
                String::new()
            };
            println!("  {:<12} {}{marker}", p.slug, p.name);
            if !p.required_vars.is_empty() {
                println!(
                    "  {:<12} {} {}",
                    "",
                    "requires:".style(self.ctx.styles.dim),
                    p.required_vars.join(", ")
                );
            }
            if !p.optional_vars.is_empty() {
                println!(
                    "  {:<12} {} {}",
                    "",
                    "optional:".style(self.ctx.styles.dim),
                    p.optional_vars.join(", ")
                );
            }
        }
        println!("\nShip logs: logship ship --app <name> --provider <slug>");
    }

    /// Render the summary of a setup run.
    pub fn render_setup(&self, report: &SetupReport) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.success(&format!(
            "Logs of {} are shipping to {}.",
            report.target_app, report.provider
        ));

        let shipper = match &report.shipper {
            ShipperAppOutcome::Existing { app } => format!("{} (existing)", app.name),
            ShipperAppOutcome::Created { app, .. } => format!("{} (created)", app.name),
        };
        self.ctx.kv("Shipper app", &shipper);

        let machine = match &report.machine {
            MachineOutcome::Existing { count } => format!("{count} running"),
            MachineOutcome::Launched { machine_id, region } => {
                format!("{machine_id} launched in {region}")
            }
        };
        self.ctx.kv("Machine    ", &machine);

        if let Some(addon) = &report.addon {
            let state = if addon.created { "created" } else { "existing" };
            self.ctx.kv("Add-on     ", &format!("{} ({state})", addon.name));
        }
        self.ctx.kv("Secrets    ", &report.secrets.join(", "));
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &LogshipConfig, path: &std::path::Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<20} {}", "api.graphql_url:", config.api.graphql_url);
        println!("  {:<20} {}", "api.machines_url:", config.api.machines_url);
        println!("  {:<20} {}", "shipper.image:", config.shipper.image);
        println!(
            "  {:<20} {}",
            "shipper.region:",
            config.shipper.region().unwrap_or("(nearest)")
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            "LOGSHIP_CONFIG:",
            std::env::var("LOGSHIP_CONFIG").unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "FLY_API_TOKEN:",
            if std::env::var("FLY_API_TOKEN").is_ok() {
                "(set)"
            } else {
                "(not set)"
            }
        );
    }
}
