//! Initialize portico in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use portico_form::FormInputs;

use crate::config::ConfigFile;

/// Run the init command.
pub async fn run(config_path: &Path, config: &ConfigFile, yes: bool) -> Result<()> {
    tracing::info!("Initializing portico...");

    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    } else {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
    }

    fs::create_dir_all(&config.store.dir).context("Failed to create store directory")?;

    let store = config.store();
    if store.load().is_none() || yes {
        store
            .save(&FormInputs::default().snapshot())
            .context("Failed to save empty profile")?;
        tracing::info!("Created {}", store.slot_path().display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'portico set --name <NAME>' to start filling in your profile.");

    Ok(())
}

pub(crate) const DEFAULT_CONFIG: &str = r#"# Portico Configuration

[store]
# Directory holding the auto-saved profile
dir = ".portico"

# Slot name (the profile is saved to <dir>/<slot>.json)
slot = "portfolio-form"

[export]
# Directory exported pages are written to
output = "."

# Minify the embedded stylesheet
minify = false

# Open the exported page in a browser
open = false

[live]
# Preview page kept in sync by 'portico watch'
output = ".portico/preview.html"

# Meta refresh interval in seconds (0 disables)
refresh = 2
"#;
