//! Durable key-value storage backends.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::store::StoreError;

/// Named string slots in some durable storage.
pub trait KeyValueSlots: Send + Sync {
    /// Read a slot. `Ok(None)` if the slot does not exist.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the whole content of a slot.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One JSON file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing a slot.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueSlots for FileSlots {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read(format!("{}: {}", path.display(), e))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::Write(format!("{}: {}", self.dir.display(), e)))?;

        // Write then rename so a reader never sees a half-written slot.
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{}.json.tmp", key));
        fs::write(&tmp, value)
            .map_err(|e| StoreError::Write(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Write(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Write(format!("{}: {}", path.display(), e))),
        }
    }
}

/// In-process slots, lost when dropped.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueSlots for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().map_err(|_| StoreError::Poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().map_err(|_| StoreError::Poisoned)?;
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_slot_round_trip() {
        let temp = tempdir().unwrap();
        let slots = FileSlots::new(temp.path().join("state"));

        assert_eq!(slots.read("profile").unwrap(), None);

        slots.write("profile", "{\"name\":\"Ada\"}").unwrap();
        assert_eq!(
            slots.read("profile").unwrap().as_deref(),
            Some("{\"name\":\"Ada\"}")
        );
        assert!(slots.path_for("profile").exists());

        slots.remove("profile").unwrap();
        assert_eq!(slots.read("profile").unwrap(), None);
    }

    #[test]
    fn file_slot_overwrites() {
        let temp = tempdir().unwrap();
        let slots = FileSlots::new(temp.path());

        slots.write("profile", "first, and a bit longer").unwrap();
        slots.write("profile", "second").unwrap();

        assert_eq!(slots.read("profile").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn removing_missing_slot_is_ok() {
        let temp = tempdir().unwrap();
        let slots = FileSlots::new(temp.path());

        assert!(slots.remove("nothing").is_ok());
    }

    #[test]
    fn memory_slots() {
        let slots = MemorySlots::new();

        slots.write("a", "1").unwrap();
        assert_eq!(slots.read("a").unwrap().as_deref(), Some("1"));
        assert_eq!(slots.read("b").unwrap(), None);

        slots.remove("a").unwrap();
        assert_eq!(slots.read("a").unwrap(), None);
    }
}
