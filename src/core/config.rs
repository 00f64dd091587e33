//! Configuration.
//!
//! Two layers: the optional `.envsync.toml` project file ([`Settings`]) and
//! the resolved provider credentials ([`ProviderConfig`]) that the sync
//! workflow receives explicitly. The token is never read from the file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.envsync.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderSection,
    #[serde(default)]
    pub server: ServerSection,
}

/// `[provider]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderSection {
    pub project_id: Option<String>,
    pub org_id: Option<String>,
    pub api_base: Option<String>,
}

/// `[server]` table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<String>,
}

impl Settings {
    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Load `.envsync.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        debug!(path = %path.display(), "config loaded");
        Ok(settings)
    }
}

/// Everything needed to talk to the provider for one project.
#[derive(Clone)]
pub struct ProviderConfig {
    token: Option<Zeroizing<String>>,
    project_id: Option<String>,
    org_id: Option<String>,
    api_base: String,
}

impl ProviderConfig {
    /// Create a config. Blank values count as absent.
    pub fn new(token: Option<String>, project_id: Option<String>) -> Self {
        Self {
            token: non_blank(token).map(Zeroizing::new),
            project_id: non_blank(project_id),
            org_id: None,
            api_base: constants::DEFAULT_API_BASE.to_string(),
        }
    }

    /// Scope requests to a team/organization.
    pub fn with_org_id(mut self, org_id: Option<String>) -> Self {
        self.org_id = non_blank(org_id);
        self
    }

    /// Point at a different API host.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Fill anything not already set from the project file.
    pub fn merge_settings(mut self, settings: &ProviderSection) -> Self {
        if self.project_id.is_none() {
            self.project_id = non_blank(settings.project_id.clone());
        }
        if self.org_id.is_none() {
            self.org_id = non_blank(settings.org_id.clone());
        }
        if let Some(base) = non_blank(settings.api_base.clone()) {
            if self.api_base == constants::DEFAULT_API_BASE {
                self.api_base = base;
            }
        }
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.as_str())
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn org_id(&self) -> Option<&str> {
        self.org_id.as_deref()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Check the config is complete enough to reach the provider.
    ///
    /// # Errors
    ///
    /// `MissingToken`, `MissingProjectId`, or `InvalidValue` for an
    /// unparseable API base.
    pub fn validate(&self) -> Result<()> {
        if self.token.is_none() {
            return Err(ConfigError::MissingToken.into());
        }
        if self.project_id.is_none() {
            return Err(ConfigError::MissingProjectId.into());
        }
        self.base_url()?;
        Ok(())
    }

    /// The parsed API base.
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_base).map_err(|e| ConfigError::InvalidValue {
            field: "api_base",
            reason: format!("{}: {}", self.api_base, e),
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                field: "api_base",
                reason: format!("{} is not a base URL", self.api_base),
            }
            .into());
        }
        Ok(url)
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .field("org_id", &self.org_id)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
