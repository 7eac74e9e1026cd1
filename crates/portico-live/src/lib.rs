//! Live preview for portico profile pages.
//!
//! Watches the auto-save slot and rewrites a preview page every time the saved
//! form state changes, broadcasting what happened to any subscribers.

pub mod hub;
pub mod session;
pub mod watcher;

pub use hub::{LiveHub, LiveMessage};
pub use session::{LiveConfig, LiveError, LiveSession};
pub use watcher::{FileWatcher, WatchEvent};
