//! Serve command - run the runtime-config HTTP endpoint.

use std::collections::HashMap;

use tracing::info;

use crate::cli::{load_env_file, output, runtime, ProviderArgs};
use crate::core::config::Settings;
use crate::core::constants;
use crate::error::{ConfigError, Result};
use crate::server::{self, AppState};

/// Bind and serve until Ctrl+C.
///
/// Missing provider credentials do not stop the server from starting; sync
/// requests report them as 500s and the status route shows what is missing.
pub fn execute(bind: Option<String>, provider: ProviderArgs) -> Result<()> {
    let settings = Settings::load()?;
    let bind = bind
        .or_else(|| settings.server.bind.clone())
        .unwrap_or_else(|| constants::DEFAULT_BIND.to_string());

    let config = provider.into_config(&settings);
    if let Err(e) = config.validate() {
        output::warn(&format!("sync requests will fail: {}", e));
    }

    let state = AppState::new(config, environment()?);

    runtime()?.block_on(async move {
        let listener = tokio::net::TcpListener::bind(&bind)
            .await
            .map_err(|e| ConfigError::InvalidValue {
                field: "bind",
                reason: format!("{}: {}", bind, e),
            })?;
        info!(addr = %bind, "starting server");
        output::success(&format!("serving on http://{}", listener.local_addr()?));
        server::serve(listener, state).await
    })
}

/// Process environment over the default dotenv file.
fn environment() -> Result<HashMap<String, String>> {
    let mut env: HashMap<String, String> = load_env_file(None)?
        .map(|file| file.entries().iter().cloned().collect())
        .unwrap_or_default();
    env.extend(std::env::vars());
    Ok(env)
}
