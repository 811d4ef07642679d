//! Unsaved-input detection for the form.

use marquee_core::MovieDraft;

/// Tracks whether the draft holds user input and reports the moment it
/// starts to.
///
/// The form runs [`DirtyTracker::observe`] after every draft change. Only
/// the clean-to-dirty transition is reported. A draft that becomes empty
/// again re-arms the tracker.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirtyTracker {
    dirty: bool,
}

impl DirtyTracker {
    /// Returns `true` when `draft` is populated and the previous one was not.
    pub fn observe(&mut self, draft: &MovieDraft) -> bool {
        let populated = draft.is_populated();
        let became_dirty = populated && !self.dirty;
        self.dirty = populated;
        became_dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
