//! Test fixtures and constants.

/// Token the mock provider expects.
pub const TOKEN: &str = "test-token";

/// Project id the mock provider serves.
pub const PROJECT: &str = "prj_test";

/// Team id used by org-scoped tests.
pub const TEAM: &str = "team_test";

pub const BACKEND_URL: &str = "https://api.example.com";

pub const REVALIDATION: &str = "abc123";

/// `.env.local` with real values for both required keys.
pub const READY_ENV: &str = "\
# CMS
NEXT_PUBLIC_BACKEND_URL=https://cms.acme.io/
REVALIDATION_TOKEN=\"s3cret token\"
DATABASE_URL=postgres://localhost/site
";

/// `.env.local` straight from the sample file.
pub const PLACEHOLDER_ENV: &str = "\
NEXT_PUBLIC_BACKEND_URL=https://api.example.com
REVALIDATION_TOKEN=change-me
";

/// The payload from the basic sync scenarios.
pub fn scenario_payload() -> serde_json::Value {
    serde_json::json!({
        "NEXT_PUBLIC_BACKEND_URL": BACKEND_URL,
        "REVALIDATION_TOKEN": REVALIDATION,
    })
}
