//! Env type.
//!
//! A parsed dotenv file (`.env.local` by default) used as a payload source
//! by `push` and as a fallback lookup by `check`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::types::RawPayload;
use crate::error::{ConfigError, Result};

/// A parsed dotenv file
#[derive(Debug, Clone)]
pub struct Env {
    entries: Vec<(String, String)>,
    path: PathBuf,
}

impl Env {
    /// Parse a dotenv file from disk
    ///
    /// Skips empty lines and comments, strips a leading `export `, and
    /// supports values with or without quotes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EnvFileNotFound` if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::EnvFileNotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let env = Self::parse(&contents, path.to_path_buf());
        debug!(path = %path.display(), entries = env.len(), "env file loaded");
        Ok(env)
    }

    /// Load the file if it exists, otherwise `None`.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse dotenv text.
    pub fn parse(contents: &str, path: PathBuf) -> Self {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            if let Some((key, value)) = line.split_once('=') {
                entries.push((key.trim().to_string(), parse_env_value(value.trim())));
            }
        }

        Self { entries, path }
    }

    /// Create from raw key-value pairs
    pub fn from_pairs(pairs: Vec<(String, String)>, path: PathBuf) -> Self {
        Self {
            entries: pairs,
            path,
        }
    }

    /// Get a value by key; the last assignment wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as key-value pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every entry as an unsanitized payload.
    ///
    /// Unknown keys are kept; the sanitizer drops them.
    pub fn to_payload(&self) -> RawPayload {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), Some(v.clone())))
            .collect()
    }
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
