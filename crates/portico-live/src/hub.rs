//! Broadcast of live preview updates.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use portico_render::{Preview, PreviewStyle};
use portico_store::SaveIndicator;
use serde::Serialize;
use tokio::sync::broadcast;
use tokio::time::Instant;

/// Messages sent to live preview subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveMessage {
    /// Preview was re-rendered from the saved state
    PreviewUpdated {
        /// Inner markup of the preview container
        html: String,
        /// Styles applied to the container
        style: PreviewStyle,
    },

    /// Nothing is saved; the container shows a placeholder
    Cleared,

    /// The slot was written; show the saved indicator
    Saved,

    /// The saved indicator timed out
    SaveIndicatorHidden,

    /// Rendering or writing the preview failed
    Error { message: String },
}

impl From<Option<Preview>> for LiveMessage {
    fn from(preview: Option<Preview>) -> Self {
        match preview {
            Some(preview) => LiveMessage::PreviewUpdated {
                html: preview.html,
                style: preview.style,
            },
            None => LiveMessage::Cleared,
        }
    }
}

/// Fans live messages out to subscribers and owns the saved indicator.
#[derive(Debug, Clone)]
pub struct LiveHub {
    sender: broadcast::Sender<LiveMessage>,
    indicator: Arc<Mutex<SaveIndicator>>,
}

impl LiveHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self {
            sender,
            indicator: Arc::new(Mutex::new(SaveIndicator::new())),
        }
    }

    /// Send a message to all subscribers.
    pub fn send(&self, msg: LiveMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Publish a freshly rendered preview, or `Cleared` when nothing is saved.
    pub fn send_preview(&self, preview: Option<Preview>) -> LiveMessage {
        let msg = LiveMessage::from(preview);
        self.send(msg.clone());
        msg
    }

    /// Show the saved indicator and send `Saved`.
    ///
    /// `SaveIndicatorHidden` follows once the indicator times out. A save
    /// while it is visible restarts the timer, and only one hide is sent.
    pub fn send_saved(&self) {
        self.indicator().show_at(Instant::now().into_std());
        self.send(LiveMessage::Saved);

        let hub = self.clone();
        tokio::spawn(async move {
            if hub.wait_for_indicator_timeout().await {
                hub.send(LiveMessage::SaveIndicatorHidden);
            }
        });
    }

    /// Whether the saved indicator is currently shown.
    pub fn indicator_visible(&self) -> bool {
        self.indicator().is_visible_at(Instant::now().into_std())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LiveMessage> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Sleep until the indicator times out. Returns `true` for the one
    /// caller that hides it.
    async fn wait_for_indicator_timeout(&self) -> bool {
        loop {
            let left = {
                let mut indicator = self.indicator();
                let now = Instant::now().into_std();
                if indicator.expire_at(now) {
                    return true;
                }
                indicator.remaining_at(now)
            };

            match left {
                Some(left) => tokio::time::sleep(left).await,
                None => return false,
            }
        }
    }

    fn indicator(&self) -> MutexGuard<'_, SaveIndicator> {
        self.indicator.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LiveHub {
    fn default() -> Self {
        Self::new()
    }
}
