use shared_types::{AppConfig, DirectoryConfig, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

static DEFAULT: AppConfig = AppConfig {
    features: FeatureFlags {
        telemetry: false,
        sidebar_status: true,
    },
    directory: DirectoryConfig {
        accounts: Vec::new(),
    },
};

/// Parse a config document. Invalid TOML degrades to defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(path = CONFIG_PATH, error = %e, "config parse failed, using defaults");
        AppConfig::default()
    })
}

/// Load `.env`, then read `config.toml` into the global `OnceLock`. Only
/// the first call (or the first [`install_config`]) has effect.
pub fn load_config() -> &'static AppConfig {
    let _ = dotenvy::dotenv();
    if std::env::var("SESSION_SECRET").map_or(true, |s| s.is_empty()) {
        tracing::warn!("SESSION_SECRET is not set, sign-in will fail");
    }

    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(
                features = ?config.features,
                accounts = config.directory.accounts.len(),
                "config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, using defaults");
            AppConfig::default()
        }
    })
}

/// Install an already-built config. Returns whatever config ends up
/// active, which is the earlier one if loading already happened.
pub fn install_config(config: AppConfig) -> &'static AppConfig {
    CONFIG.get_or_init(|| config)
}

fn current() -> &'static AppConfig {
    CONFIG.get().unwrap_or(&DEFAULT)
}

/// Loaded feature flags, or the defaults before loading.
pub fn feature_flags() -> &'static FeatureFlags {
    &current().features
}

/// Accounts the sign-in service accepts.
pub fn directory() -> &'static DirectoryConfig {
    &current().directory
}
