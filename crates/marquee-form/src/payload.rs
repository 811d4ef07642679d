//! Submission encoding.
//!
//! The backend takes one flat multipart form per movie. Nested fields travel
//! as JSON strings, people are reduced to their identifiers, and a newly
//! picked poster is attached as a file part.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use marquee_core::{MediaRef, MovieDraft, PersonId, Poster, PosterFile};

use crate::error::{ApiResult, FormResult};

/// One value of the flat payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadValue {
    Text(String),
    File(PosterFile),
}

/// The encoded movie, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePayload {
    fields: Vec<(&'static str, PayloadValue)>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CastCredit<'a> {
    actor: &'a PersonId,
    role_as: &'a str,
    lead_actor: bool,
}

impl MoviePayload {
    /// Encode a draft.
    ///
    /// `trailer` is a trailer uploaded outside the form; it takes precedence
    /// over the one stored in the draft.
    pub fn encode(draft: &MovieDraft, trailer: Option<&MediaRef>) -> FormResult<Self> {
        let mut payload = Self::default();

        payload.push_text("title", &draft.title);
        payload.push_text("storyLine", &draft.story_line);
        payload.push_json("tags", &draft.tags)?;

        if let Some(id) = draft.director.as_ref().and_then(|d| d.reference_id()) {
            payload.push_text("director", id.as_str());
        }

        if !draft.writers.is_empty() {
            let ids: Vec<&PersonId> = draft
                .writers
                .iter()
                .filter_map(|writer| {
                    let id = writer.reference_id();
                    if id.is_none() {
                        log::warn!("Writer {:?} has no identifier, not sent", writer.name);
                    }
                    id
                })
                .collect();
            payload.push_json("writers", &ids)?;
        }

        if !draft.cast.is_empty() {
            let credits: Vec<CastCredit<'_>> = draft
                .cast
                .iter()
                .filter_map(|member| match member.actor.reference_id() {
                    Some(actor) => Some(CastCredit {
                        actor,
                        role_as: &member.role_as,
                        lead_actor: member.lead_actor,
                    }),
                    None => {
                        log::warn!("Actor {:?} has no identifier, not sent", member.actor.name);
                        None
                    }
                })
                .collect();
            payload.push_json("cast", &credits)?;
        }

        payload.push_text("releaseDate", &draft.release_date);
        payload.push_text("status", draft.status.map_or("", |s| s.label()));
        payload.push_text("type", draft.movie_type.map_or("", |t| t.label()));
        payload.push_text("language", draft.language.map_or("", |l| l.label()));
        payload.push_json("genre", &draft.genre)?;

        match &draft.poster {
            Poster::Empty => {}
            Poster::Existing(media) => payload.push_json("poster", media)?,
            Poster::Pending(file) => payload
                .fields
                .push(("poster", PayloadValue::File(file.clone()))),
        }

        if let Some(trailer) = trailer.or(draft.trailer.as_ref()) {
            payload.push_json("trailer", trailer)?;
        }

        Ok(payload)
    }

    fn push_text(&mut self, name: &'static str, value: &str) {
        self.fields.push((name, PayloadValue::Text(value.to_string())));
    }

    fn push_json<T: Serialize + ?Sized>(&mut self, name: &'static str, value: &T) -> FormResult<()> {
        let json = serde_json::to_string(value).map_err(marquee_core::Error::from)?;
        self.fields.push((name, PayloadValue::Text(json)));
        Ok(())
    }

    pub fn fields(&self) -> &[(&'static str, PayloadValue)] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: &str) -> Option<&PayloadValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// The text value of a field; `None` for missing fields and files.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            PayloadValue::Text(text) => Some(text.as_str()),
            PayloadValue::File(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build the `multipart/form-data` body.
    pub fn into_multipart(self) -> ApiResult<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = match value {
                PayloadValue::Text(text) => form.text(name, text),
                PayloadValue::File(file) => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.mime)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}
