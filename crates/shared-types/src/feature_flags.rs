use serde::{Deserialize, Serialize};

/// Feature flags controlling optional integrations.
///
/// Loaded from `config.toml` at server startup and exposed to clients via a
/// server function. Missing fields take the [`Default`] values: telemetry
/// off, sidebar status on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Export request traces over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Show the status indicator and version line in the sidebar.
    #[serde(default = "enabled")]
    pub sidebar_status: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            telemetry: false,
            sidebar_status: true,
        }
    }
}
