//! Command-line interface.

pub mod check;
pub mod completions;
pub mod output;
pub mod push;
pub mod remote;
pub mod serve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{ProviderConfig, Settings};
use crate::core::constants;

/// envsync - Keep a site's runtime configuration in sync with its deployment provider.
#[derive(Parser)]
#[command(
    name = "envsync",
    about = "Keep a site's runtime configuration in sync with its deployment provider",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Serve the runtime-config HTTP endpoint
    Serve {
        /// Address to bind (default from .envsync.toml, then 127.0.0.1:3000)
        #[arg(long)]
        bind: Option<String>,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Push variables from a dotenv file and KEY=VALUE pairs to the provider
    Push {
        /// Dotenv file to read (default: .env.local if present)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Extra assignments; these override the file
        #[arg(value_name = "KEY=VALUE")]
        assignments: Vec<String>,

        /// Show the creates and updates without writing
        #[arg(long)]
        dry_run: bool,

        /// Prompt for required variables that are missing
        #[arg(short, long)]
        interactive: bool,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Check the local environment for missing or placeholder variables
    Check {
        /// Dotenv file to fall back to (default: .env.local if present)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List allow-listed variables currently stored at the provider
    Remote {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        provider: ProviderArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Provider connection flags shared by commands that reach the API.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// Provider API token
    #[arg(long, env = "VERCEL_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Provider project id
    #[arg(long, env = "VERCEL_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Provider team/organization id
    #[arg(long, env = "VERCEL_ORG_ID")]
    pub org_id: Option<String>,

    /// Provider API base URL
    #[arg(long, env = "ENVSYNC_API_BASE")]
    pub api_base: Option<String>,
}

impl ProviderArgs {
    /// Resolve flags over the project file.
    pub fn into_config(self, settings: &Settings) -> ProviderConfig {
        let mut config =
            ProviderConfig::new(self.token, self.project_id).with_org_id(self.org_id);
        if let Some(base) = self.api_base.filter(|b| !b.trim().is_empty()) {
            config = config.with_api_base(base);
        }
        config.merge_settings(&settings.provider)
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Serve { bind, provider } => serve::execute(bind, provider),
        Push {
            file,
            assignments,
            dry_run,
            interactive,
            provider,
        } => push::execute(push::PushOptions {
            file,
            assignments,
            dry_run,
            interactive,
            provider,
        }),
        Check { file, json } => check::execute(file, json),
        Remote { json, provider } => remote::execute(json, provider),
        Completions { shell } => completions::execute(shell),
    }
}

/// Runtime for commands that talk to the network.
pub(crate) fn runtime() -> crate::error::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
}

/// Read the dotenv file for `push`/`check`.
///
/// An explicit path must exist; the default `.env.local` is optional.
pub(crate) fn load_env_file(
    file: Option<PathBuf>,
) -> crate::error::Result<Option<crate::core::domain::Env>> {
    use crate::core::domain::Env;

    match file {
        Some(path) => Env::load(path).map(Some),
        None => Env::load_optional(constants::ENV_FILE),
    }
}
