//! Transient "saved" indicator shown after every save of the slot.

use std::time::{Duration, Instant};

/// How long the indicator stays visible after a save.
pub const INDICATOR_DURATION: Duration = Duration::from_millis(2000);

/// Tracks when the last save happened so a UI can show a short notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveIndicator {
    shown_at: Option<Instant>,
}

impl SaveIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the indicator starting at `now`. A later save restarts the timer.
    pub fn show_at(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    pub fn hide(&mut self) {
        self.shown_at = None;
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_some()
    }

    /// Hide the indicator if its time is up. Returns `true` only on the
    /// call that actually hid it.
    pub fn expire_at(&mut self, now: Instant) -> bool {
        if self.shown_at.is_some() && !self.is_visible_at(now) {
            self.shown_at = None;
            true
        } else {
            false
        }
    }

    /// Time left before the indicator hides, if it is visible.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        let shown_at = self.shown_at?;
        let elapsed = now.saturating_duration_since(shown_at);
        INDICATOR_DURATION
            .checked_sub(elapsed)
            .filter(|left| !left.is_zero())
    }
}
