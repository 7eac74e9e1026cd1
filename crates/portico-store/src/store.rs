//! Save/restore of the form state.

use std::path::PathBuf;

use portico_form::FormState;

use crate::slot::{FileSlots, KeyValueSlots};

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "portfolio-form";

/// Errors that can occur when writing or clearing the slot.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read slot: {0}")]
    Read(String),

    #[error("Failed to write slot: {0}")]
    Write(String),

    #[error("Failed to serialize form state: {0}")]
    Serialize(String),

    #[error("Slot storage lock poisoned")]
    Poisoned,
}

/// Keeps one form state in a named slot.
pub struct StateStore<S: KeyValueSlots> {
    slots: S,
    slot: String,
}

impl<S: KeyValueSlots> StateStore<S> {
    pub fn new(slots: S, slot: impl Into<String>) -> Self {
        Self {
            slots,
            slot: slot.into(),
        }
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Serialize the whole state into the slot, replacing what was there.
    pub fn save(&self, state: &FormState) -> Result<(), StoreError> {
        let json =
            serde_json::to_string(state).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.slots.write(&self.slot, &json)?;

        tracing::debug!(slot = %self.slot, bytes = json.len(), "Saved form state");
        Ok(())
    }

    /// Read the saved state back.
    ///
    /// Returns `None` when nothing was saved. A slot that cannot be read or
    /// parsed is logged and also reported as `None`.
    pub fn load(&self) -> Option<FormState> {
        let raw = match self.slots.read(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(slot = %self.slot, "No saved form state");
                return None;
            }
            Err(e) => {
                tracing::warn!(slot = %self.slot, "Error loading saved data: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<FormState>(&raw) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!(slot = %self.slot, "Error loading saved data: {}", e);
                None
            }
        }
    }

    /// Delete the slot.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.slots.remove(&self.slot)?;
        tracing::debug!(slot = %self.slot, "Cleared form state");
        Ok(())
    }
}

impl StateStore<FileSlots> {
    /// Open a file-backed store in `dir`.
    pub fn open(dir: impl Into<PathBuf>, slot: impl Into<String>) -> Self {
        Self::new(FileSlots::new(dir), slot)
    }

    /// File the slot lives in.
    pub fn slot_path(&self) -> PathBuf {
        self.slots.path_for(&self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlots;
    use portico_form::{Animation, Layout, Platform, Skills, Theme};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_state() -> FormState {
        let mut state = FormState {
            name: "Ada Lovelace".to_string(),
            accent_color: "#112233".to_string(),
            bio: "Engineer".to_string(),
            skills: Skills::new("C, C++, , Rust"),
            theme: Theme::Colorful,
            font: "Playfair Display".to_string(),
            layout: Layout::Side,
            animation: Animation::SlideUp,
            profile_image: Some("data:image/png;base64,iVBORw==".to_string()),
            ..FormState::default()
        };
        state.social.set(Platform::Github, "https://github.com/ada");
        state.social.set(Platform::Portfolio, "https://ada.dev");
        state
    }

    #[test]
    fn load_without_save_is_none() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        let state = sample_state();

        assert_eq!(store.load(), None);
        store.save(&state).unwrap();

        assert_eq!(store.load(), Some(state));
    }

    #[test]
    fn round_trip_keeps_empty_and_unknown_values() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        let state = FormState {
            theme: Theme::from_name("neon"),
            layout: Layout::from_name("grid"),
            animation: Animation::from_name(""),
            profile_image: Some("data:,".to_string()),
            ..FormState::default()
        };

        store.save(&state).unwrap();

        assert_eq!(store.load(), Some(state));
    }

    #[test]
    fn save_overwrites_previous_state() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        store.save(&sample_state()).unwrap();

        let replacement = FormState {
            name: "Grace".to_string(),
            ..FormState::default()
        };
        store.save(&replacement).unwrap();

        assert_eq!(store.load(), Some(replacement));
    }

    #[test]
    fn corrupt_slot_loads_as_none() {
        let slots = MemorySlots::new();
        slots.write(DEFAULT_SLOT, "this is not json").unwrap();
        let store = StateStore::new(slots, DEFAULT_SLOT);

        assert_eq!(store.load(), None);
    }

    #[test]
    fn wrongly_typed_slot_loads_as_none() {
        let slots = MemorySlots::new();
        slots.write(DEFAULT_SLOT, r#"{"name": 42}"#).unwrap();
        let store = StateStore::new(slots, DEFAULT_SLOT);

        assert_eq!(store.load(), None);
    }

    #[test]
    fn clear_removes_saved_state() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);
        store.save(&sample_state()).unwrap();

        store.clear().unwrap();

        assert_eq!(store.load(), None);
    }

    #[test]
    fn clearing_empty_slot_is_ok() {
        let store = StateStore::new(MemorySlots::new(), DEFAULT_SLOT);

        store.clear().unwrap();
        store.clear().unwrap();
    }

    #[test]
    fn file_store_persists_across_instances() {
        let temp = tempdir().unwrap();
        let state = sample_state();

        let first = StateStore::open(temp.path(), "profile");
        first.save(&state).unwrap();
        assert!(first.slot_path().ends_with("profile.json"));

        let second = StateStore::open(temp.path(), "profile");
        assert_eq!(second.load(), Some(state));
    }
}
