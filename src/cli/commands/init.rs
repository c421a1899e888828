//! Init command handler.

use anyhow::Result;
use std::path::Path;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Writes the config template to `config_path`.
pub fn run_init(config_path: &Path, force: bool) -> Result<()> {
    let manager = ConfigManager::new(config_path);
    manager.write_template(force)?;

    println!(
        "{} Created config file {}",
        Style::success("✓"),
        Style::value(manager.config_path().display())
    );
    println!(
        "{}",
        Style::hint("Set openai.apiKey (or export OPENAI_API_KEY) and fill in the business description.")
    );

    Ok(())
}
