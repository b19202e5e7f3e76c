//! Show command implementation.
//!
//! Prints the effective configuration (defaults merged with `pluma.toml`).

use anyhow::{Context, Result};

use crate::config::SiteConfig;

/// Execute show command
pub fn run_show(json: bool, config: &SiteConfig) -> Result<()> {
    let rendered = if json {
        serde_json::to_string_pretty(config).context("serializing config to JSON")?
    } else {
        toml::to_string_pretty(config).context("serializing config to TOML")?
    };
    println!("{rendered}");
    Ok(())
}
