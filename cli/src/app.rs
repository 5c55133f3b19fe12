//! Application context, the unified state passed to every command handler.

use anyhow::{Context, Result};

use crate::domain::LogshipConfig;
use crate::infra::config::YamlConfigStore;
use crate::infra::graphql::GraphqlClient;
use crate::infra::machines::MachinesClient;
use crate::infra::prompt::DialoguerPrompter;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer, TerminalReporter};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `LOGSHIP_YES` env vars).
    pub yes: bool,
    /// Platform API token, if one was supplied.
    pub access_token: Option<String>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Configuration file store.
    pub config_store: YamlConfigStore,
    /// When `true`, never prompt; missing input is an error.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `LOGSHIP_YES`
    /// environment variables are present.
    pub non_interactive: bool,
    access_token: Option<String>,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("LOGSHIP_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        // JSON mode keeps stdout parseable.
        let quiet = flags.output.quiet || flags.output.json;

        Self {
            output: OutputContext::new(flags.output.no_color, quiet),
            mode,
            config_store: YamlConfigStore,
            non_interactive,
            access_token: flags
                .behaviour
                .access_token
                .filter(|t| !t.trim().is_empty()),
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Progress reporter bound to this context's terminal output.
    #[must_use]
    pub fn terminal_reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Operator prompter honouring the non-interactive setting.
    #[must_use]
    pub fn prompter(&self) -> DialoguerPrompter {
        DialoguerPrompter::new(self.non_interactive)
    }

    fn token(&self) -> Result<&str> {
        self.access_token.as_deref().context(
            "No access token available. Set FLY_API_TOKEN or pass --access-token.",
        )
    }

    /// GraphQL platform client built from configuration and the access token.
    ///
    /// # Errors
    ///
    /// Returns an error if no access token is available or the HTTP client
    /// cannot be built.
    pub fn graphql_client(&self, config: &LogshipConfig) -> Result<GraphqlClient> {
        let token = self.token()?;
        GraphqlClient::new(&config.api.graphql_url, token).context("building GraphQL client")
    }

    /// Machines API client built from configuration and the access token.
    ///
    /// # Errors
    ///
    /// Returns an error if no access token is available or the HTTP client
    /// cannot be built.
    pub fn machines_client(&self, config: &LogshipConfig) -> Result<MachinesClient> {
        let token = self.token()?;
        MachinesClient::new(&config.api.machines_url, token).context("building Machines client")
    }
}
