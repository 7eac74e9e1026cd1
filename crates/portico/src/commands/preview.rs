//! Print the live preview of the saved profile.

use std::io::Write;

use anyhow::{Context, Result};
use portico_render::{DocumentRenderer, PREVIEW_PLACEHOLDER};

use crate::config::ConfigFile;

/// Run the preview command.
pub async fn run(config: &ConfigFile, json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();

    let Some(state) = config.store().load() else {
        tracing::info!("No saved profile");
        writeln!(out, "{}", PREVIEW_PLACEHOLDER)?;
        return Ok(());
    };

    let preview = DocumentRenderer::default()
        .render_preview(&state)
        .context("Failed to render preview")?;

    if json {
        let line = serde_json::to_string(&preview).context("Failed to serialize preview")?;
        writeln!(out, "{}", line)?;
    } else {
        tracing::info!(
            background = %preview.style.background,
            color = %preview.style.color,
            font = %preview.style.font_family,
            "Preview container style"
        );
        writeln!(out, "{}", preview.html)?;
    }

    Ok(())
}
