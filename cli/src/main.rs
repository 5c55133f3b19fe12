//! logship - ship an application's logs to an external provider

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use logship_cli::cli::Cli;
use logship_cli::output::json;

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,logship_cli=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let as_json = cli.json;

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            match json::format_error(&format!("{e:#}"), json::error_code(&e)) {
                Ok(body) if as_json => println!("{body}"),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
