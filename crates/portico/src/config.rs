//! Configuration file (portico.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use portico_live::LiveConfig;
use portico_store::{FileSlots, StateStore, DEFAULT_SLOT};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub store: StoreSettings,
    #[serde(default)]
    pub export: ExportSettings,
    #[serde(default)]
    pub live: LiveSettings,
}

#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    /// Directory holding the auto-save slot
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_slot")]
    pub slot: String,
}

#[derive(Debug, Deserialize)]
pub struct ExportSettings {
    /// Directory exported pages are written to
    #[serde(default = "default_export_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub minify: bool,
    /// Open the exported page in a browser
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Deserialize)]
pub struct LiveSettings {
    /// Preview page rewritten on every change
    #[serde(default = "default_live_output")]
    pub output: PathBuf,
    /// Meta refresh interval in seconds, 0 to disable
    #[serde(default = "default_refresh")]
    pub refresh: u32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            slot: default_slot(),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output: default_export_output(),
            minify: false,
            open: false,
        }
    }
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            output: default_live_output(),
            refresh: default_refresh(),
        }
    }
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".portico")
}
fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}
fn default_export_output() -> PathBuf {
    PathBuf::from(".")
}
fn default_live_output() -> PathBuf {
    PathBuf::from(".portico/preview.html")
}
fn default_refresh() -> u32 {
    2
}

impl ConfigFile {
    /// Load configuration if the file exists.
    /// Returns an error if the file exists but is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());

        Ok(config)
    }

    /// Open the configured auto-save slot.
    pub fn store(&self) -> StateStore<FileSlots> {
        StateStore::open(&self.store.dir, self.store.slot.clone())
    }

    /// Live session settings.
    pub fn live_config(&self) -> LiveConfig {
        LiveConfig {
            store_dir: self.store.dir.clone(),
            slot: self.store.slot.clone(),
            output: self.live.output.clone(),
            refresh: (self.live.refresh > 0).then_some(self.live.refresh),
        }
    }
}
