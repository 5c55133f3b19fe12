//! `logship providers`: list supported logging providers.

use anyhow::Result;

use crate::app::AppContext;
use crate::domain::list_providers;

/// Run the providers command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(app: &AppContext) -> Result<()> {
    app.renderer().render_providers(list_providers())
}
