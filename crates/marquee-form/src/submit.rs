//! The submission state machine: `Idle -> Submitting -> Idle`.
//!
//! A submission validates and encodes the draft, dispatches one create or
//! update request, and applies the outcome. There is no retry; a failed
//! attempt leaves the draft as it was so the user can submit again.

use marquee_core::{MediaRef, MovieId, MovieRecord};

use crate::api::MovieApi;
use crate::error::{ApiResult, FormError, FormResult};
use crate::form::MovieForm;
use crate::payload::MoviePayload;
use crate::signals::NoticeKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// Which backend operation a submission performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionTarget {
    Create,
    Update(MovieId),
}

/// An encoded submission waiting to be dispatched.
#[derive(Debug)]
pub struct PendingSubmission {
    target: SubmissionTarget,
    payload: MoviePayload,
}

impl PendingSubmission {
    pub fn target(&self) -> &SubmissionTarget {
        &self.target
    }

    pub fn payload(&self) -> &MoviePayload {
        &self.payload
    }

    /// Send the payload, handing the target back with the result so it can
    /// be passed to [`MovieForm::complete_submission`].
    pub async fn dispatch<A>(self, api: &A) -> (SubmissionTarget, ApiResult<MovieRecord>)
    where
        A: MovieApi + ?Sized,
    {
        let result = match &self.target {
            SubmissionTarget::Create => api.create_movie(self.payload).await,
            SubmissionTarget::Update(id) => api.update_movie(id, self.payload).await,
        };
        (self.target, result)
    }
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(MovieRecord),
    Updated(MovieRecord),
}

impl SubmitOutcome {
    pub fn record(&self) -> &MovieRecord {
        match self {
            Self::Created(record) | Self::Updated(record) => record,
        }
    }
}

impl MovieForm {
    /// Validate and encode the draft and enter `Submitting`.
    ///
    /// Validation failures are notified and returned without changing state.
    pub fn begin_submission(&mut self, trailer: Option<&MediaRef>) -> FormResult<PendingSubmission> {
        if self.state == SubmissionState::Submitting {
            return Err(FormError::SubmissionInProgress);
        }

        if let Err(err) = self.validator.validate(&self.draft) {
            log::debug!("Movie draft rejected: {}", err);
            self.notifier.notify(NoticeKind::Error, err.message());
            return Err(err.into());
        }

        let payload = MoviePayload::encode(&self.draft, trailer)?;
        let target = match &self.record_id {
            Some(id) => SubmissionTarget::Update(id.clone()),
            None => SubmissionTarget::Create,
        };

        log::info!("Submitting movie {:?} ({} fields)", self.draft.title, payload.len());
        self.state = SubmissionState::Submitting;
        Ok(PendingSubmission { target, payload })
    }

    /// Apply the backend's answer and return to `Idle`.
    ///
    /// On success the user is notified, the host is told to close (and, for
    /// a new movie, to reset its creation flow) and the draft is reset. On
    /// failure the error is notified and the draft is kept.
    ///
    /// Without a submission in progress the outcome is refused and the form
    /// is left untouched.
    pub fn complete_submission(
        &mut self,
        target: SubmissionTarget,
        result: ApiResult<MovieRecord>,
    ) -> FormResult<SubmitOutcome> {
        if self.state != SubmissionState::Submitting {
            log::warn!("Ignoring a submission outcome while idle");
            return Err(FormError::NotSubmitting);
        }
        self.state = SubmissionState::Idle;

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::warn!("Movie submission failed: {}", err);
                self.notifier.notify(NoticeKind::Error, &err.user_message());
                return Err(err.into());
            }
        };

        let outcome = match target {
            SubmissionTarget::Create => {
                log::info!("Created movie {}", record.id);
                self.notifier
                    .notify(NoticeKind::Success, "Movie created successfully");
                SubmitOutcome::Created(record)
            }
            SubmissionTarget::Update(_) => {
                log::info!("Updated movie {}", record.id);
                self.notifier
                    .notify(NoticeKind::Success, "Movie updated successfully");
                SubmitOutcome::Updated(record)
            }
        };

        self.reset();
        self.events.close();
        if matches!(outcome, SubmitOutcome::Created(_)) {
            self.events.creation_reset();
        }

        Ok(outcome)
    }

    /// Run a whole submission against `api`.
    ///
    /// `trailer` is a trailer uploaded outside the form and wins over the
    /// draft's own.
    pub async fn submit<A>(&mut self, api: &A, trailer: Option<&MediaRef>) -> FormResult<SubmitOutcome>
    where
        A: MovieApi + ?Sized,
    {
        let pending = self.begin_submission(trailer)?;
        let (target, result) = pending.dispatch(api).await;
        self.complete_submission(target, result)
    }
}
