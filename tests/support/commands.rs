//! Command helper methods for Test.

use super::{Test, PROJECT, TOKEN};
use assert_cmd::Command;
use std::process::Output;

/// Variables that would leak the developer's own setup into a test.
const SCRUBBED: &[&str] = &[
    "VERCEL_TOKEN",
    "VERCEL_PROJECT_ID",
    "VERCEL_ORG_ID",
    "ENVSYNC_API_BASE",
    "ENVSYNC_LOG",
    "NEXT_PUBLIC_BACKEND_URL",
    "REVALIDATION_TOKEN",
    "NEXT_PUBLIC_GTM_ID",
];

impl Test {
    /// An envsync command running in the test directory with no provider
    /// credentials and colors off.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envsync").expect("failed to find envsync binary");
        for var in SCRUBBED {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// An envsync command pointed at a mock provider.
    pub fn provider_cmd(&self, api_base: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("VERCEL_TOKEN", TOKEN)
            .env("VERCEL_PROJECT_ID", PROJECT)
            .env("ENVSYNC_API_BASE", api_base);
        cmd
    }

    /// Shortcut for `envsync check`.
    pub fn check(&self) -> Output {
        self.cmd()
            .arg("check")
            .output()
            .expect("failed to run envsync check")
    }

    /// Shortcut for `envsync push` against a mock provider.
    pub fn push(&self, api_base: &str, args: &[&str]) -> Output {
        self.provider_cmd(api_base)
            .arg("push")
            .args(args)
            .output()
            .expect("failed to run envsync push")
    }
}
