//! Write a default configuration file

use std::path::Path;

use barcheck::config::{CONFIG_FILE, Config};
use barcheck::output::{OperationResult, OutputMode};

/// Create `.barcheck.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = Path::new(CONFIG_FILE);

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!("Already initialized ({CONFIG_FILE} exists). Use --force to overwrite."),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save(path)?;

    OperationResult {
        success: true,
        message: format!("Created {CONFIG_FILE}"),
    }
    .render(mode);

    Ok(())
}
