//! envsync - Keep a site's runtime configuration in sync with its deployment provider.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envsync::cli::output;
use envsync::cli::{execute, Cli};
use envsync::core::constants;
use envsync::error::{ConfigError, Error, ProviderError, ValidationError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envsync=debug")
        } else {
            EnvFilter::new("envsync=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::MissingToken) => Some("set VERCEL_TOKEN or pass --token"),
        Error::Config(ConfigError::MissingProjectId) => {
            Some("set VERCEL_PROJECT_ID, pass --project-id, or add project_id to .envsync.toml")
        }
        Error::Validation(ValidationError::MissingRequired(_)) => {
            Some("run: envsync check")
        }
        Error::Provider(ProviderError::Unavailable { .. }) => {
            Some("check the token and project id, then retry")
        }
        Error::Provider(ProviderError::Write { .. }) => {
            Some("re-run envsync push; variables already written are updated again")
        }
        _ => None,
    }
}
