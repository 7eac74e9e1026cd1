//! File watching for the auto-save slot.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Quiet period before a burst of file events is reported.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// Slot file was written
    SlotChanged(PathBuf),

    /// Slot file was deleted
    SlotRemoved(PathBuf),
}

/// Watches the directory holding a slot file.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch `slot_file`. Its parent directory must exist.
    ///
    /// Returns the watcher and a channel to receive events. Bursts of events
    /// are coalesced into the last one.
    pub fn new(
        slot_file: &Path,
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let dir = slot_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let slot_file = slot_file.to_path_buf();

        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(&dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        std::thread::spawn(move || {
            while let Ok(event) = sync_rx.recv() {
                let mut pending = classify_event(&slot_file, &event);

                // Keep draining until the directory goes quiet.
                while let Ok(next) = sync_rx.recv_timeout(DEBOUNCE) {
                    if let Some(e) = classify_event(&slot_file, &next) {
                        pending = Some(e);
                    }
                }

                if let Some(e) = pending {
                    if async_tx.blocking_send(e).is_err() {
                        break;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Classify a notify event into a WatchEvent for the slot file.
fn classify_event(slot_file: &Path, event: &notify::Event) -> Option<WatchEvent> {
    use notify::EventKind;

    let slot_name = slot_file.file_name()?;
    let path = event
        .paths
        .iter()
        .rev()
        .find(|p| p.file_name() == Some(slot_name))?;

    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            if path.exists() {
                Some(WatchEvent::SlotChanged(path.clone()))
            } else {
                Some(WatchEvent::SlotRemoved(path.clone()))
            }
        }
        EventKind::Remove(_) => Some(WatchEvent::SlotRemoved(path.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, EventKind, RemoveKind};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn ignores_other_files() {
        let temp = tempdir().unwrap();
        let slot = temp.path().join("profile.json");
        let event = notify::Event::new(EventKind::Create(CreateKind::File))
            .add_path(temp.path().join("other.json"));

        assert_eq!(classify_event(&slot, &event), None);
    }

    #[test]
    fn classifies_slot_removal() {
        let temp = tempdir().unwrap();
        let slot = temp.path().join("profile.json");
        let event =
            notify::Event::new(EventKind::Remove(RemoveKind::File)).add_path(slot.clone());

        assert_eq!(
            classify_event(&slot, &event),
            Some(WatchEvent::SlotRemoved(slot))
        );
    }

    #[test]
    fn classifies_slot_write() {
        let temp = tempdir().unwrap();
        let slot = temp.path().join("profile.json");
        fs::write(&slot, "{}").unwrap();
        let event =
            notify::Event::new(EventKind::Create(CreateKind::File)).add_path(slot.clone());

        assert_eq!(
            classify_event(&slot, &event),
            Some(WatchEvent::SlotChanged(slot))
        );
    }

    #[tokio::test]
    async fn watches_slot_changes() {
        let temp = tempdir().unwrap();
        let slot = temp.path().join("profile.json");

        let (watcher, mut rx) = FileWatcher::new(&slot).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(&slot, "{\"name\":\"Ada\"}").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv()).await;

        drop(watcher);

        assert!(event.is_ok(), "timeout waiting for file watch event");
        assert!(event.unwrap().is_some(), "channel should not be closed");
    }
}
