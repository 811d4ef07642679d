//! Draft validation run before any submission.

use crate::error::ValidationError;
use crate::model::MovieDraft;

/// Checks a draft before it is encoded and sent.
pub trait Validator: Send + Sync {
    /// Returns the first problem found, if any.
    fn validate(&self, draft: &MovieDraft) -> Result<(), ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(&MovieDraft) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, draft: &MovieDraft) -> Result<(), ValidationError> {
        self(draft)
    }
}

/// The upload form's built-in rules. Checks run in form order and the
/// first failure wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct DraftValidator;

impl Validator for DraftValidator {
    fn validate(&self, draft: &MovieDraft) -> Result<(), ValidationError> {
        let fail = |message: &str| Err(ValidationError::new(message));

        if draft.title.trim().is_empty() {
            return fail("Title is missing!");
        }
        if draft.story_line.trim().is_empty() {
            return fail("Story line is missing!");
        }
        if draft.tags.is_empty() {
            return fail("Tags are missing!");
        }
        if draft.tags.iter().any(|tag| tag.trim().is_empty()) {
            return fail("Invalid tags!");
        }
        if draft.language.is_none() {
            return fail("Language is missing!");
        }
        if draft.release_date.trim().is_empty() {
            return fail("Release date is missing!");
        }
        if draft.release_date().is_none() {
            return fail("Invalid release date!");
        }
        if draft.status.is_none() {
            return fail("Movie status is missing!");
        }
        if draft.movie_type.is_none() {
            return fail("Movie type is missing!");
        }
        if draft.genre.is_empty() {
            return fail("Genres are missing!");
        }
        for member in &draft.cast {
            if member.actor.reference_id().is_none() {
                return fail("Invalid cast!");
            }
            if member.role_as.trim().is_empty() {
                return fail("Role of cast member is missing!");
            }
        }

        Ok(())
    }
}
