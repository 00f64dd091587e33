//! Push command - sync local values to the provider.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use dialoguer::Input;
use tracing::{debug, info};

use crate::cli::{load_env_file, output, runtime, ProviderArgs};
use crate::core::config::Settings;
use crate::core::domain::{Action, WriteKind};
use crate::core::keys::ConfigKey;
use crate::core::sync::SyncService;
use crate::core::types::RawPayload;
use crate::error::{Result, ValidationError};

/// Options for `envsync push`.
pub struct PushOptions {
    pub file: Option<PathBuf>,
    pub assignments: Vec<String>,
    pub dry_run: bool,
    pub interactive: bool,
    pub provider: ProviderArgs,
}

/// Build the payload, then sync it (or show the plan with `--dry-run`).
pub fn execute(opts: PushOptions) -> Result<()> {
    info!(dry_run = opts.dry_run, "running push");

    let settings = Settings::load()?;
    let config = opts.provider.into_config(&settings);
    let service = SyncService::new(&config)?;

    let mut payload = match load_env_file(opts.file)? {
        Some(env) => {
            debug!(path = %env.path().display(), "reading values from env file");
            env.to_payload()
        }
        None => RawPayload::new(),
    };
    for assignment in &opts.assignments {
        let (key, value) = parse_assignment(assignment)?;
        payload.insert(key, Some(value));
    }

    if opts.interactive {
        prompt_missing(&mut payload)?;
    }

    let rt = runtime()?;

    if opts.dry_run {
        let actions = rt.block_on(service.plan(&payload))?;
        print_plan(&actions);
        return Ok(());
    }

    let result = rt.block_on(service.sync(&payload))?;

    output::success(&format!(
        "synced {} variable{}",
        result.len(),
        if result.len() == 1 { "" } else { "s" }
    ));
    for (key, kind) in result.writes() {
        output::list_item(&format!("{} ({}d)", output::key(key.name()), kind));
    }
    output::dimmed("redeploy the project so serverless functions pick up the new values");

    Ok(())
}

/// Split `KEY=VALUE`. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ValidationError::InvalidAssignment(raw.to_string()).into()),
    }
}

/// Ask for every required key that has no usable value yet.
fn prompt_missing(payload: &mut RawPayload) -> Result<()> {
    if !io::stdin().is_terminal() {
        debug!("stdin is not a terminal, skipping prompts");
        return Ok(());
    }

    for key in ConfigKey::required() {
        let has_value = payload
            .get(key.name())
            .and_then(|v| v.as_deref())
            .is_some_and(|v| !v.trim().is_empty());
        if has_value {
            continue;
        }

        output::dimmed(key.description());
        let value: String = Input::new()
            .with_prompt(format!("{} (e.g. {})", key.name(), key.example()))
            .interact_text()?;
        payload.insert(key.name().to_string(), Some(value));
    }

    Ok(())
}

fn print_plan(actions: &[Action]) {
    output::section("Planned writes");
    for action in actions {
        let verb = match action.kind() {
            WriteKind::Create => "create",
            WriteKind::Update => "update",
        };
        output::kv(verb, output::key(action.key().name()));
    }
    println!();
    output::dimmed("dry run: nothing was written");
}
