//! Print the saved profile.

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::ConfigFile;

/// Run the show command.
pub async fn run(config: &ConfigFile) -> Result<()> {
    let store = config.store();

    let Some(state) = store.load() else {
        tracing::info!("No saved profile in {}", store.slot_path().display());
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&state).context("Failed to serialize profile")?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", json)?;

    Ok(())
}
