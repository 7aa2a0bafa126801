use anyhow::{Context, Result, bail};

use rpwgen::configtool::{GenConfig, config_path};

pub fn show_config(config: &GenConfig) -> Result<()> {
    let path = config_path()?;
    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

pub fn init_config(force: bool) -> Result<()> {
    let path = config_path()?;
    if path.exists() && !force {
        bail!("Config already exists at {} (use --force to overwrite)", path.display());
    }
    GenConfig::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
