use serde::{Deserialize, Serialize};

use crate::model::draft::MovieDraft;
use crate::model::ids::MovieId;

/// A movie persisted by the backend, as used for hydrating the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Some endpoints answer with `id` instead of `_id`.
    #[serde(rename = "_id", alias = "id")]
    pub id: MovieId,

    #[serde(flatten)]
    pub draft: MovieDraft,
}

impl MovieRecord {
    #[must_use]
    pub fn new(id: impl Into<MovieId>, draft: MovieDraft) -> Self {
        Self {
            id: id.into(),
            draft,
        }
    }
}
