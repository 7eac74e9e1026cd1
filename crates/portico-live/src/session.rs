//! Live preview session.

use std::fs;
use std::path::PathBuf;

use portico_render::{DocumentRenderer, RenderError, RenderOptions};
use portico_store::{FileSlots, StateStore, DEFAULT_SLOT};

use crate::hub::{LiveHub, LiveMessage};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for a live preview session.
#[derive(Debug, Clone)]
pub struct LiveConfig {
    /// Directory holding the auto-save slot
    pub store_dir: PathBuf,

    /// Slot name
    pub slot: String,

    /// Preview page written on every change
    pub output: PathBuf,

    /// Meta refresh interval of the preview page, in seconds
    pub refresh: Option<u32>,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".portico"),
            slot: DEFAULT_SLOT.to_string(),
            output: PathBuf::from(".portico/preview.html"),
            refresh: Some(2),
        }
    }
}

/// Errors that can occur in a live session.
#[derive(Debug, thiserror::Error)]
pub enum LiveError {
    #[error("File watch error: {0}")]
    Watch(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Failed to write preview: {0}")]
    Write(String),
}

/// Re-renders the preview page whenever the saved state changes.
pub struct LiveSession {
    config: LiveConfig,
    store: StateStore<FileSlots>,
    renderer: DocumentRenderer,
    hub: LiveHub,
}

impl LiveSession {
    pub fn new(config: LiveConfig) -> Self {
        let store = StateStore::open(&config.store_dir, config.slot.clone());

        Self {
            config,
            store,
            renderer: DocumentRenderer::new(RenderOptions::default()),
            hub: LiveHub::new(),
        }
    }

    pub fn config(&self) -> &LiveConfig {
        &self.config
    }

    pub fn hub(&self) -> &LiveHub {
        &self.hub
    }

    /// Load the saved state, rewrite the preview page and broadcast the result.
    pub fn refresh(&self) -> Result<LiveMessage, LiveError> {
        let preview = self
            .store
            .load()
            .map(|state| self.renderer.render_preview(&state))
            .transpose()?;

        let page = self
            .renderer
            .render_preview_page(preview.as_ref(), self.config.refresh)?;

        if let Some(parent) = self.config.output.parent() {
            fs::create_dir_all(parent).map_err(|e| LiveError::Write(e.to_string()))?;
        }
        fs::write(&self.config.output, page).map_err(|e| {
            LiveError::Write(format!("{}: {}", self.config.output.display(), e))
        })?;

        Ok(self.hub.send_preview(preview))
    }

    /// Refresh once, then follow the slot until the watcher stops.
    pub async fn run(self) -> Result<(), LiveError> {
        fs::create_dir_all(&self.config.store_dir).map_err(|e| {
            LiveError::Write(format!("{}: {}", self.config.store_dir.display(), e))
        })?;

        self.refresh_logged();

        let slot_path = self.store.slot_path();
        let (watcher, mut rx) =
            FileWatcher::new(&slot_path).map_err(|e| LiveError::Watch(e.to_string()))?;

        tracing::info!(
            "Watching {} -> {}",
            slot_path.display(),
            self.config.output.display()
        );

        while let Some(event) = rx.recv().await {
            match event {
                WatchEvent::SlotChanged(path) => {
                    tracing::debug!("Slot written: {}", path.display());
                    self.hub.send_saved();
                    self.refresh_logged();
                }
                WatchEvent::SlotRemoved(path) => {
                    tracing::debug!("Slot removed: {}", path.display());
                    self.refresh_logged();
                }
            }
        }

        // Keep watcher alive
        drop(watcher);
        Ok(())
    }

    fn refresh_logged(&self) {
        match self.refresh() {
            Ok(LiveMessage::Cleared) => tracing::info!("No saved profile, showing placeholder"),
            Ok(_) => tracing::info!("Preview updated"),
            Err(e) => {
                tracing::warn!("Failed to refresh preview: {}", e);
                self.hub.send(LiveMessage::Error {
                    message: e.to_string(),
                });
            }
        }
    }
}
