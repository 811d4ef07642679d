//! Field update handlers.
//!
//! Each handler turns one UI interaction into a [`DraftPatch`] merged into
//! the form. Writers and cast reject duplicates silently.

use std::fmt;
use std::str::FromStr;

use marquee_core::model::DraftPatch;
use marquee_core::options::parse_choice;
use marquee_core::{CastMember, Genre, MovieRecord, Person, Poster, PosterFile};

use crate::error::{FormError, FormResult};
use crate::form::MovieForm;

/// Scalar fields that can be set from a raw input value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    StoryLine,
    ReleaseDate,
    Status,
    Type,
    Language,
}

impl DraftField {
    pub const ALL: &'static [Self] = &[
        Self::Title,
        Self::StoryLine,
        Self::ReleaseDate,
        Self::Status,
        Self::Type,
        Self::Language,
    ];

    /// Input name as used by the form and the backend.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::StoryLine => "storyLine",
            Self::ReleaseDate => "releaseDate",
            Self::Status => "status",
            Self::Type => "type",
            Self::Language => "language",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

impl MovieForm {
    /// Set a text or select field from its raw input value.
    ///
    /// An empty value clears a select field. Unknown names and values
    /// outside a select's options are rejected and leave the draft as is.
    pub fn set_field(&mut self, name: &str, value: &str) -> FormResult<()> {
        let patch = match name.parse::<DraftField>()? {
            DraftField::Title => DraftPatch {
                title: Some(value.to_string()),
                ..DraftPatch::default()
            },
            DraftField::StoryLine => DraftPatch {
                story_line: Some(value.to_string()),
                ..DraftPatch::default()
            },
            DraftField::ReleaseDate => DraftPatch {
                release_date: Some(value.to_string()),
                ..DraftPatch::default()
            },
            DraftField::Status => DraftPatch {
                status: Some(parse_choice(value)?),
                ..DraftPatch::default()
            },
            DraftField::Type => DraftPatch {
                movie_type: Some(parse_choice(value)?),
                ..DraftPatch::default()
            },
            DraftField::Language => DraftPatch {
                language: Some(parse_choice(value)?),
                ..DraftPatch::default()
            },
        };

        self.merge(patch);
        Ok(())
    }

    /// Use a newly picked image as the poster and preview it.
    pub fn select_poster(&mut self, file: PosterFile) {
        self.preview.show_file(&file);
        self.merge(DraftPatch {
            poster: Some(Poster::Pending(file)),
            ..DraftPatch::default()
        });
    }

    pub fn update_tags(&mut self, tags: Vec<String>) {
        self.merge(DraftPatch {
            tags: Some(tags),
            ..DraftPatch::default()
        });
    }

    pub fn update_genres(&mut self, genres: Vec<Genre>) {
        self.merge(DraftPatch {
            genre: Some(genres),
            ..DraftPatch::default()
        });
    }

    pub fn update_director(&mut self, director: Option<Person>) {
        self.merge(DraftPatch {
            director: Some(director),
            ..DraftPatch::default()
        });
    }

    /// Append a writer unless one with the same identity is already listed.
    ///
    /// Returns whether the writer was added.
    pub fn add_writer(&mut self, writer: Person) -> bool {
        if writer.lookup_id().is_none() {
            log::debug!("Ignoring writer {:?} without an identifier", writer.name);
            return false;
        }
        if self.draft.writers.iter().any(|w| w.same_lookup_id(&writer)) {
            log::debug!("Writer {:?} already listed", writer.name);
            return false;
        }

        let mut writers = self.draft.writers.clone();
        writers.push(writer);
        self.merge(DraftPatch {
            writers: Some(writers),
            ..DraftPatch::default()
        });
        true
    }

    /// Remove every writer with the given writer's name.
    ///
    /// Matching is by name, not identity, so namesakes go together. When no
    /// writers remain the writers modal closes.
    pub fn delete_writer(&mut self, writer: &Person) {
        let remaining: Vec<Person> = self
            .draft
            .writers
            .iter()
            .filter(|w| w.name != writer.name)
            .cloned()
            .collect();
        let now_empty = remaining.is_empty();

        self.merge(DraftPatch {
            writers: Some(remaining),
            ..DraftPatch::default()
        });
        if now_empty {
            self.writers_modal = false;
        }
    }

    /// Append a cast member unless the actor is already cast.
    ///
    /// Returns whether the member was added.
    pub fn add_cast(&mut self, member: CastMember) -> bool {
        if member.actor.lookup_id().is_none() {
            log::debug!("Ignoring cast member {:?} without an identifier", member.actor.name);
            return false;
        }
        if self
            .draft
            .cast
            .iter()
            .any(|existing| existing.actor.same_lookup_id(&member.actor))
        {
            log::debug!("Actor {:?} already cast", member.actor.name);
            return false;
        }

        let mut cast = self.draft.cast.clone();
        cast.push(member);
        self.merge(DraftPatch {
            cast: Some(cast),
            ..DraftPatch::default()
        });
        true
    }

    /// Remove the cast member at `index`; out of range is a no-op.
    pub fn delete_cast(&mut self, index: usize) -> Option<CastMember> {
        if index >= self.draft.cast.len() {
            return None;
        }

        let mut cast = self.draft.cast.clone();
        let removed = cast.remove(index);
        self.merge(DraftPatch {
            cast: Some(cast),
            ..DraftPatch::default()
        });
        Some(removed)
    }

    /// Load a persisted movie for editing, replacing the whole draft.
    pub fn hydrate(&mut self, record: MovieRecord) {
        let MovieRecord { id, draft } = record;
        log::info!("Editing movie {} ({:?})", id, draft.title);

        match draft.poster.url() {
            Some(url) => self.preview.show_remote(url),
            None => self.preview.clear(),
        }
        self.record_id = Some(id);
        self.replace_draft(draft);
    }
}
