use serde::Serialize;

/// An environment scope a stored value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentTarget {
    Production,
    Preview,
    Development,
}

impl DeploymentTarget {
    /// Every write is applied to all targets.
    pub const ALL: [DeploymentTarget; 3] = [
        DeploymentTarget::Production,
        DeploymentTarget::Preview,
        DeploymentTarget::Development,
    ];
}
