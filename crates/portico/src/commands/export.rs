//! Export the saved profile as a standalone page.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use portico_form::FormState;
use portico_render::{write_export, DocumentRenderer, RenderOptions};

use crate::config::ConfigFile;

/// Where the exported page goes.
#[derive(Debug)]
pub enum Target {
    /// Output directory, falling back to the configured one
    Dir(Option<PathBuf>),
    Stdout,
}

/// Run the export command.
pub async fn run(
    config: &ConfigFile,
    target: Target,
    minify: Option<bool>,
    open: bool,
) -> Result<()> {
    let state = config.store().load().unwrap_or_else(|| {
        tracing::warn!("No saved profile, exporting defaults");
        FormState::default()
    });

    let renderer = DocumentRenderer::new(RenderOptions {
        minify: minify.unwrap_or(config.export.minify),
    });
    let html = renderer.render(&state).context("Failed to render page")?;

    let dir = match target {
        Target::Stdout => {
            let mut out = std::io::stdout().lock();
            out.write_all(html.as_bytes())?;
            return Ok(());
        }
        Target::Dir(dir) => dir.unwrap_or_else(|| config.export.output.clone()),
    };

    let path = write_export(&dir, &state.name, &html)?;
    tracing::info!("Exported {}", path.display());

    if open || config.export.open {
        if let Err(e) = open::that(&path) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    Ok(())
}
