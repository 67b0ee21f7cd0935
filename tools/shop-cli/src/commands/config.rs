//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);
    ctx.output.kv("token", &mask(&ctx.config.api.token));
    ctx.output.kv("timeout_secs", &ctx.config.api.timeout_secs.to_string());

    ctx.output.info("");
    ctx.output.info("[log]");
    ctx.output.kv("format", &format!("{:?}", ctx.config.log.format).to_lowercase());
    ctx.output.kv("level", ctx.config.log.level.as_str());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    // Structural errors were already rejected while loading.
    ctx.config.api.validate()?;

    if ctx.config.api.token.trim().is_empty() {
        ctx.output.warn("Warning: api.token is empty; requests will be unauthenticated");
    }
    if ctx.config.api.base_url.starts_with("http://") {
        ctx.output.warn("Warning: api.base_url is not HTTPS");
    }

    ctx.output.success("Configuration is valid");
    Ok(())
}

/// Show only the first few characters of a secret.
fn mask(secret: &str) -> String {
    let visible: String = secret.chars().take(3).collect();
    if secret.chars().count() <= 3 {
        "*".repeat(secret.chars().count())
    } else {
        format!("{}{}", visible, "*".repeat(secret.chars().count() - 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("prakmobile"), "pra*******");
        assert_eq!(mask("ab"), "**");
        assert_eq!(mask(""), "");
    }
}
