//! Constants used throughout envsync.
//!
//! Centralizes file names, environment variable names and provider defaults.

/// Project configuration file name.
pub const CONFIG_FILE: &str = ".envsync.toml";

/// Dotenv file read by `push` and `check` when no `--file` is given.
pub const ENV_FILE: &str = ".env.local";

/// Provider API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.vercel.com";

/// Default server bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Environment variable holding the provider token.
pub const TOKEN_VAR: &str = "VERCEL_TOKEN";

/// Environment variable holding the provider project id.
pub const PROJECT_VAR: &str = "VERCEL_PROJECT_ID";

/// Environment variable holding the provider team/organization id.
pub const ORG_VAR: &str = "VERCEL_ORG_ID";

/// Environment variable overriding the provider API base URL.
pub const API_BASE_VAR: &str = "ENVSYNC_API_BASE";

/// Log filter environment variable.
pub const LOG_VAR: &str = "ENVSYNC_LOG";

/// Storage classification sent with every write.
pub const ENV_TYPE: &str = "encrypted";

/// Provider request timeout.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
