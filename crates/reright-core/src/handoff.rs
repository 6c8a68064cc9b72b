//! Single-slot hand-off between a context-menu action and the next popup.

use parking_lot::Mutex;

/// Holds at most one pending text. A second `set` overwrites the first;
/// `take` reads once and clears.
#[derive(Debug, Default)]
pub struct PendingTextSlot {
    slot: Mutex<Option<String>>,
}

impl PendingTextSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text`, returning the value it replaced.
    pub fn set(&self, text: impl Into<String>) -> Option<String> {
        self.slot.lock().replace(text.into())
    }

    pub fn take(&self) -> Option<String> {
        self.slot.lock().take()
    }

    pub fn is_pending(&self) -> bool {
        self.slot.lock().is_some()
    }
}
