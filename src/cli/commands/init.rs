use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Writes the configuration file with default values. An existing file is
/// left untouched. In test mode nothing is written.
pub fn handle(path: &Path, is_test: bool) -> AppResult<()> {
    println!("⚙️  Initializing envwatch…");
    println!("📄 Config file : {}", path.display());

    if is_test {
        info("Test mode: configuration file not written.");
        return Ok(());
    }

    if path.exists() {
        info("Configuration file already exists, leaving it unchanged.");
        return Ok(());
    }

    Config::default().save_to(path)?;
    success(format!("Configuration written to {}", path.display()));
    Ok(())
}
