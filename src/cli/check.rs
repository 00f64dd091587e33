//! Check command - environment guard for local development.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{load_env_file, output};
use crate::core::guard::{self, MissingVar};
use crate::core::keys::ConfigKey;
use crate::error::{Result, ValidationError};

#[derive(Serialize)]
struct CheckReport {
    ready: bool,
    missing: Vec<MissingVar>,
    #[serde(rename = "backendUrl")]
    backend_url: Option<String>,
    #[serde(rename = "envFile")]
    env_file: Option<String>,
}

/// Report required variables that are unset or still placeholders.
///
/// Process environment wins over the dotenv file, matching how the site
/// itself resolves them. Fails when anything required is missing.
pub fn execute(file: Option<PathBuf>, json: bool) -> Result<()> {
    let env_file = load_env_file(file)?;

    let lookup = |key: ConfigKey| {
        std::env::var(key.name())
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| {
                env_file
                    .as_ref()
                    .and_then(|f| f.get(key.name()))
                    .map(str::to_string)
            })
    };

    let missing = guard::missing(lookup);
    let backend_url =
        lookup(ConfigKey::NextPublicBackendUrl).and_then(|v| guard::normalize_backend_url(&v));

    let report = CheckReport {
        ready: missing.is_empty(),
        missing,
        backend_url,
        env_file: env_file.as_ref().map(|f| f.path().display().to_string()),
    };

    if json {
        output::json(&report)?;
    } else {
        print_report(&report, &lookup);
    }

    if report.ready {
        Ok(())
    } else {
        Err(ValidationError::MissingRequired(report.missing.iter().map(|m| m.key).collect()).into())
    }
}

fn print_report(report: &CheckReport, lookup: &dyn Fn(ConfigKey) -> Option<String>) {
    output::section("Runtime configuration");

    for key in ConfigKey::ALL {
        let status = if report.missing.iter().any(|m| m.key == key) {
            "✗ missing"
        } else if lookup(key).is_some() {
            "✓ set"
        } else {
            "- not set (optional)"
        };
        output::kv(key.name(), status);
    }

    output::kv(
        "backend",
        report.backend_url.as_deref().unwrap_or("unresolved"),
    );
    output::kv("env file", report.env_file.as_deref().unwrap_or("none"));

    if report.ready {
        println!();
        output::success("all required variables are set");
        return;
    }

    for var in &report.missing {
        println!();
        output::warn(&format!("{} ({})", output::key(var.key.name()), var.label));
        output::dimmed(&format!("  {}", var.description));
        output::dimmed(&format!("  example: {}", var.example));
        if let Some(value) = &var.value {
            output::dimmed(&format!("  current: {}", value));
        }
    }
    println!();
}
