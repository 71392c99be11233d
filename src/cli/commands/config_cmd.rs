//! config command - Show resolved configuration values

use crate::core::config::Config;
use crate::engine::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// List all configuration values with precedence applied.
pub fn list(ctx: &Context) -> Result<()> {
    let root = ctx.project_root()?;
    let loaded = Config::load(Some(&root)).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            ctx.verbosity(),
        );
    }

    println!("{}", render(&loaded.config));
    Ok(())
}

/// Render the resolved configuration as `key = value` lines.
fn render(config: &Config) -> String {
    let mut lines = Vec::new();

    lines.push("# Sources".to_string());
    lines.push(format!(
        "global = {}",
        config
            .global_config_loaded_from()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not found)".to_string())
    ));
    lines.push(format!(
        "project = {}",
        config
            .project_config_loaded_from()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not found)".to_string())
    ));

    lines.push(String::new());
    lines.push("# Resolved".to_string());
    lines.push(format!("navigation = {}", config.navigation()));
    lines.push(format!("source_dir = {}", config.source_dir()));
    lines.push(format!("containers_dir = {}", config.containers_dir()));
    lines.push(format!(
        "templates_dir = {}",
        config
            .templates_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(embedded)".to_string())
    ));

    lines.push(String::new());
    lines.push("# Anchors".to_string());
    for (name, anchor) in config.pattern_registry().iter() {
        lines.push(format!("{} = {:?}", name, anchor));
    }

    lines.join("\n")
}
