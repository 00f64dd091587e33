//! Domain types.

mod action;
mod entry;
mod env;
mod record;
mod sync;
mod target;

pub use action::{Action, WriteKind};
pub use entry::DesiredEntry;
pub use env::Env;
pub use record::RemoteEnvRecord;
pub use sync::SyncResult;
pub use target::DeploymentTarget;
