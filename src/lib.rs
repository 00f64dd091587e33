//! envsync - Keep a site's runtime configuration in sync with its deployment provider.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── serve         # Run the HTTP endpoint
//! │   ├── push          # Sync a dotenv file / KEY=VALUE pairs
//! │   ├── check         # Environment guard
//! │   ├── remote        # List stored provider records
//! │   └── completions   # Shell completions
//! ├── core/             # Core library components
//! │   ├── keys          # The closed key allow-list
//! │   ├── sanitize      # Payload validation
//! │   ├── provider/     # Provider trait + Vercel client
//! │   ├── reader        # Remote state lookup
//! │   ├── reconcile     # Create-or-update planning and writes
//! │   ├── sync          # Sanitize -> read -> reconcile
//! │   ├── guard         # Missing/placeholder detection
//! │   └── config        # .envsync.toml and provider credentials
//! └── server/           # axum routes
//! ```
//!
//! # Example
//!
//! ```no_run
//! use envsync::core::config::ProviderConfig;
//! use envsync::core::sync::SyncService;
//! use envsync::core::types::RawPayload;
//!
//! # async fn run() -> envsync::error::Result<()> {
//! let config = ProviderConfig::new(Some("token".into()), Some("prj_123".into()));
//! let mut payload = RawPayload::new();
//! payload.insert("NEXT_PUBLIC_BACKEND_URL".into(), Some("https://cms.acme.io".into()));
//! payload.insert("REVALIDATION_TOKEN".into(), Some("s3cret".into()));
//!
//! let result = SyncService::new(&config)?.sync(&payload).await?;
//! println!("updated {:?}", result.keys());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod server;
