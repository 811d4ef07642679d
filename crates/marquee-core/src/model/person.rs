use serde::{Deserialize, Serialize};

use crate::model::ids::PersonId;
use crate::model::media::{self, MediaRef};

/// A person credited on a movie (director, writer or actor).
///
/// People picked from the live search carry a temporary `actorId`; people
/// loaded from a persisted record carry the backend `_id`. Either may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,

    #[serde(rename = "actorId", default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<PersonId>,

    #[serde(default)]
    pub name: String,

    #[serde(default, with = "media::lenient", skip_serializing_if = "Option::is_none")]
    pub avatar: Option<MediaRef>,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<PersonId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_actor_id(mut self, actor_id: impl Into<PersonId>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: MediaRef) -> Self {
        self.avatar = Some(avatar);
        self
    }

    /// Identity used to detect duplicates in the writers and cast lists.
    pub fn lookup_id(&self) -> Option<&PersonId> {
        self.actor_id.as_ref().or(self.id.as_ref())
    }

    /// Identity sent to the backend, preferring the persisted one.
    pub fn reference_id(&self) -> Option<&PersonId> {
        self.id.as_ref().or(self.actor_id.as_ref())
    }

    pub fn same_lookup_id(&self, other: &Self) -> bool {
        matches!((self.lookup_id(), other.lookup_id()), (Some(a), Some(b)) if a == b)
    }
}

/// An actor credited in the cast, with the role they play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    pub actor: Person,
    #[serde(default)]
    pub role_as: String,
    #[serde(default)]
    pub lead_actor: bool,
}

impl CastMember {
    #[must_use]
    pub fn new(actor: Person, role_as: impl Into<String>) -> Self {
        Self {
            actor,
            role_as: role_as.into(),
            lead_actor: false,
        }
    }

    #[must_use]
    pub fn lead(mut self) -> Self {
        self.lead_actor = true;
        self
    }
}
