//! The `lightread reset` command.

use std::path::Path;

use anyhow::{Context, Result};

pub fn execute(state_path: &Path) -> Result<()> {
    if state_path.exists() {
        std::fs::remove_file(state_path)
            .with_context(|| format!("failed to remove {}", state_path.display()))?;
        println!("Removed {}. All local progress is gone.", state_path.display());
    } else {
        println!("Nothing to reset.");
    }
    Ok(())
}
