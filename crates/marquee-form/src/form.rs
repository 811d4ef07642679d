//! The form state holder.

use std::fmt;
use std::sync::Arc;

use marquee_core::model::DraftPatch;
use marquee_core::{DraftValidator, MovieDraft, MovieId, Validator};

use crate::dirty::DirtyTracker;
use crate::preview::{ObjectUrlStore, Preview, PreviewSlot, PreviewStore};
use crate::signals::{FormEvents, Notifier};
use crate::submit::SubmissionState;

/// Owns one movie draft and everything the form tracks around it.
///
/// Every change goes through [`MovieForm::merge`] (or a wholesale
/// replacement), which builds the next draft from the current one and then
/// runs the dirty check.
pub struct MovieForm {
    pub(crate) draft: MovieDraft,
    pub(crate) record_id: Option<MovieId>,
    pub(crate) preview: PreviewSlot,
    pub(crate) writers_modal: bool,
    pub(crate) genres_modal: bool,
    pub(crate) state: SubmissionState,
    dirty: DirtyTracker,
    pub(crate) validator: Box<dyn Validator>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) events: Arc<dyn FormEvents>,
}

impl MovieForm {
    /// Create a form holding an empty draft, using the built-in validation
    /// rules and an in-memory preview store.
    pub fn new(notifier: Arc<dyn Notifier>, events: Arc<dyn FormEvents>) -> Self {
        Self {
            draft: MovieDraft::default(),
            record_id: None,
            preview: PreviewSlot::new(Arc::new(ObjectUrlStore::new())),
            writers_modal: false,
            genres_modal: false,
            state: SubmissionState::Idle,
            dirty: DirtyTracker::default(),
            validator: Box::new(DraftValidator),
            notifier,
            events,
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    #[must_use]
    pub fn with_preview_store(mut self, store: Arc<dyn PreviewStore>) -> Self {
        self.preview = PreviewSlot::new(store);
        self
    }

    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    /// Identifier of the record being edited, if any.
    pub fn record_id(&self) -> Option<&MovieId> {
        self.record_id.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.record_id.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.current()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.url()
    }

    /// The writers list is only shown while it has entries.
    pub fn writers_modal_visible(&self) -> bool {
        self.writers_modal && !self.draft.writers.is_empty()
    }

    pub fn genres_modal_visible(&self) -> bool {
        self.genres_modal
    }

    pub fn toggle_writers_modal(&mut self) {
        self.writers_modal = !self.writers_modal;
    }

    pub fn toggle_genres_modal(&mut self) {
        self.genres_modal = !self.genres_modal;
    }

    /// Replace the patched fields, keeping everything else.
    pub fn merge(&mut self, patch: DraftPatch) {
        let current = std::mem::take(&mut self.draft);
        self.replace_draft(current.merged(patch));
    }

    pub(crate) fn replace_draft(&mut self, draft: MovieDraft) {
        self.draft = draft;
        if self.dirty.observe(&self.draft) {
            log::debug!("Movie form became dirty");
            self.events.form_dirty();
        }
    }

    /// Throw the draft away and return to an empty creation form.
    pub fn reset(&mut self) {
        self.replace_draft(MovieDraft::default());
        self.record_id = None;
        self.preview.clear();
        self.writers_modal = false;
        self.genres_modal = false;
    }

    /// Ask to close the form.
    ///
    /// A clean form closes straight away. Otherwise the host is asked to
    /// confirm; on confirmation the draft is discarded and the form closes.
    /// Returns whether the form closed.
    pub fn request_close(&mut self) -> bool {
        if self.is_dirty() && !self.events.confirm_discard() {
            log::debug!("Close cancelled, keeping unsaved movie draft");
            return false;
        }

        self.reset();
        self.events.close();
        true
    }
}

impl fmt::Debug for MovieForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieForm")
            .field("draft", &self.draft)
            .field("record_id", &self.record_id)
            .field("preview", &self.preview.current())
            .field("writers_modal", &self.writers_modal)
            .field("genres_modal", &self.genres_modal)
            .field("state", &self.state)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::fakes::Recorder;
    use marquee_core::{Person, PosterFile, Status};
    use std::sync::atomic::Ordering;

    fn form() -> (MovieForm, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let form = MovieForm::new(recorder.clone(), recorder.clone());
        (form, recorder)
    }

    #[test]
    fn test_new_form_is_clean() {
        let (form, recorder) = form();
        assert_eq!(form.draft(), &MovieDraft::default());
        assert!(!form.is_dirty());
        assert!(!form.is_editing());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(Recorder::count(&recorder.dirty), 0);
    }

    #[test]
    fn test_merge_fires_dirty_once() {
        let (mut form, recorder) = form();
        form.merge(DraftPatch {
            title: Some("I".to_string()),
            ..DraftPatch::default()
        });
        form.merge(DraftPatch {
            title: Some("Interstellar".to_string()),
            status: Some(Some(Status::Public)),
            ..DraftPatch::default()
        });

        assert_eq!(form.draft().title, "Interstellar");
        assert_eq!(form.draft().status, Some(Status::Public));
        assert_eq!(Recorder::count(&recorder.dirty), 1);
    }

    #[test]
    fn test_director_or_poster_alone_keeps_form_clean() {
        let (mut form, recorder) = form();
        form.update_director(Some(Person::new("Christopher Nolan").with_id("p1")));
        assert!(!form.is_dirty());

        form.select_poster(PosterFile::new("a.png", "image/png", vec![1]));
        assert!(!form.is_dirty());
        assert_eq!(Recorder::count(&recorder.dirty), 0);

        form.set_field("title", "Interstellar").unwrap();
        assert!(form.is_dirty());
        assert_eq!(Recorder::count(&recorder.dirty), 1);
    }

    #[test]
    fn test_writers_modal_hidden_without_writers() {
        let (mut form, _) = form();
        form.toggle_writers_modal();
        assert!(!form.writers_modal_visible());

        form.merge(DraftPatch {
            writers: Some(vec![Person::new("Jonathan Nolan").with_actor_id("1")]),
            ..DraftPatch::default()
        });
        assert!(form.writers_modal_visible());
    }

    #[test]
    fn test_genres_modal_toggle() {
        let (mut form, _) = form();
        form.toggle_genres_modal();
        assert!(form.genres_modal_visible());
        form.toggle_genres_modal();
        assert!(!form.genres_modal_visible());
    }

    #[test]
    fn test_request_close_on_clean_form_skips_confirmation() {
        let (mut form, recorder) = form();
        assert!(form.request_close());
        assert_eq!(Recorder::count(&recorder.closed), 1);
    }

    #[test]
    fn test_request_close_declined_keeps_draft() {
        let (mut form, recorder) = form();
        form.merge(DraftPatch {
            title: Some("Dune".to_string()),
            ..DraftPatch::default()
        });

        assert!(!form.request_close());
        assert_eq!(form.draft().title, "Dune");
        assert_eq!(Recorder::count(&recorder.closed), 0);
    }

    #[test]
    fn test_request_close_confirmed_discards_draft() {
        let (mut form, recorder) = form();
        recorder.allow_discard.store(true, Ordering::SeqCst);
        form.merge(DraftPatch {
            title: Some("Dune".to_string()),
            ..DraftPatch::default()
        });

        assert!(form.request_close());
        assert_eq!(form.draft(), &MovieDraft::default());
        assert!(!form.is_dirty());
        assert_eq!(Recorder::count(&recorder.closed), 1);
    }

    #[test]
    fn test_debug_output() {
        let (form, _) = form();
        let debug = format!("{form:?}");
        assert!(debug.contains("MovieForm"));
        assert!(debug.contains("Idle"));
    }
}
