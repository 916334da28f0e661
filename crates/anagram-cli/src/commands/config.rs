use anagram_config::AppConfig;
use anyhow::{Context, Result};

/// Print the effective configuration (all precedence applied)
pub fn execute(config: &AppConfig) -> Result<()> {
    let rendered = config
        .to_toml_string()
        .context("Failed to serialize config as TOML")?;
    print!("{rendered}");
    Ok(())
}
