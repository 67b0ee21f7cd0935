//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_data::ShopApi;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, environment overrides applied.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one found
    /// walking up from the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(resolve_path(&cwd, path)),
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        }
        .with_env()?;

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// API client for the configured endpoint.
    pub fn api(&self) -> Result<ShopApi> {
        ShopApi::from_config(&self.config.api).context("Failed to create HTTP client")
    }
}

/// Find the nearest config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let root = std::env::temp_dir().join(format!("shop-cli-context-{}", std::process::id()));
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".shop.toml"), "").unwrap();

        assert_eq!(find_config(&nested), Some(root.join(".shop.toml")));

        std::fs::write(nested.join("shop.json"), "{}").unwrap();
        assert_eq!(find_config(&nested), Some(nested.join("shop.json")));

        std::fs::remove_dir_all(root).ok();
    }

    #[test]
    fn test_resolve_path() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_path(cwd, "shop.toml"), PathBuf::from("/work/shop.toml"));
        assert_eq!(resolve_path(cwd, "/etc/shop.toml"), PathBuf::from("/etc/shop.toml"));
    }
}
