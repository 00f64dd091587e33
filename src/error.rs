//! Error types for envsync.
//!
//! Every failure the sync workflow can produce falls into one of three
//! families: configuration (deployment is missing a credential), validation
//! (the caller sent a bad payload) and provider (the remote API refused or
//! could not be reached).

use std::path::PathBuf;

use thiserror::Error;

use crate::core::domain::WriteKind;
use crate::core::keys::ConfigKey;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// The deployment is missing something it needs to talk to the provider.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("VERCEL_TOKEN is not set; configure the provider token to allow syncing")]
    MissingToken,

    #[error("VERCEL_PROJECT_ID is not set")]
    MissingProjectId,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("env file not found: {}", .0.display())]
    EnvFileNotFound(PathBuf),
}

/// The submitted payload breaks the allow-list contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("all required variables must be filled: {}", join_keys(.0))]
    MissingRequired(Vec<ConfigKey>),

    #[error("no valid variables were provided to sync")]
    NoEntries,

    #[error("request body is not valid: {0}")]
    MalformedBody(String),

    #[error("unknown variable: {0}")]
    UnknownKey(String),

    #[error("invalid assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),
}

/// The provider API failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("could not read the current project configuration from the provider: {reason}")]
    Unavailable { reason: String },

    #[error("could not {kind} variable {key} at the provider: {reason}")]
    Write {
        key: ConfigKey,
        kind: WriteKind,
        reason: String,
    },
}

impl ProviderError {
    /// The key whose write failed, if this is a write failure.
    pub fn failed_key(&self) -> Option<ConfigKey> {
        match self {
            Self::Write { key, .. } => Some(*key),
            Self::Unavailable { .. } => None,
        }
    }
}

fn join_keys(keys: &[ConfigKey]) -> String {
    keys.iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}
