//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shop_data::ApiConfig;
use shop_observability::LogConfig;

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shop.toml", ".shop.toml", "shop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// API connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file. `.json` files are JSON, anything else TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Apply `SHOP_API_*` environment overrides.
    pub fn with_env(mut self) -> Result<Self> {
        self.api = self.api.with_env().context("Invalid API settings in environment")?;
        Ok(self)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == "json")
}

/// Generate a default shop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Shop client configuration

[api]
base_url = "{base_url}"
token = "{token}"
timeout_secs = {timeout}

[log]
# "human" or "json"
format = "human"
# trace, debug, info, warn or error (RUST_LOG takes precedence)
level = "info"
"#,
        base_url = shop_data::config::DEFAULT_BASE_URL,
        token = shop_data::config::DEFAULT_TOKEN,
        timeout = shop_data::config::DEFAULT_TIMEOUT_SECS,
    )
}
