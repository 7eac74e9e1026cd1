//! Delete the saved profile.

use anyhow::{Context, Result};

use crate::config::ConfigFile;

/// Run the clear command.
pub async fn run(config: &ConfigFile) -> Result<()> {
    let store = config.store();
    store.clear().context("Failed to clear saved profile")?;

    tracing::info!("Cleared {}", store.slot_path().display());
    Ok(())
}
