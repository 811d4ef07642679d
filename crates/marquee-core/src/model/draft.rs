use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::media::{self, MediaRef, Poster};
use crate::model::person::{CastMember, Person};
use crate::options::{choice, Genre, Language, MovieType, Status};

/// The in-progress movie record edited by the form.
///
/// Field names on the wire follow the backend (`storyLine`, `releaseDate`,
/// `type`, ...). Unset select fields travel as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieDraft {
    pub title: String,
    pub story_line: String,
    pub tags: Vec<String>,
    pub director: Option<Person>,
    pub writers: Vec<Person>,
    pub cast: Vec<CastMember>,

    /// As entered or as stored by the backend; may carry a time component.
    pub release_date: String,

    #[serde(with = "choice")]
    pub status: Option<Status>,
    #[serde(rename = "type", with = "choice")]
    pub movie_type: Option<MovieType>,
    #[serde(with = "choice")]
    pub language: Option<Language>,

    pub genre: Vec<Genre>,
    pub poster: Poster,
    #[serde(with = "media::lenient")]
    pub trailer: Option<MediaRef>,
}

/// A partial update of a [`MovieDraft`]. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub story_line: Option<String>,
    pub tags: Option<Vec<String>>,
    pub director: Option<Option<Person>>,
    pub writers: Option<Vec<Person>>,
    pub cast: Option<Vec<CastMember>>,
    pub release_date: Option<String>,
    pub status: Option<Option<Status>>,
    pub movie_type: Option<Option<MovieType>>,
    pub language: Option<Option<Language>>,
    pub genre: Option<Vec<Genre>>,
    pub poster: Option<Poster>,
    pub trailer: Option<Option<MediaRef>>,
}

impl MovieDraft {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_story_line(mut self, story_line: impl Into<String>) -> Self {
        self.story_line = story_line.into();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_type(mut self, movie_type: MovieType) -> Self {
        self.movie_type = Some(movie_type);
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn with_genres(mut self, genres: impl Into<Vec<Genre>>) -> Self {
        self.genre = genres.into();
        self
    }

    /// Build the next draft from this one with the patched fields replaced.
    #[must_use]
    pub fn merged(self, patch: DraftPatch) -> Self {
        Self {
            title: patch.title.unwrap_or(self.title),
            story_line: patch.story_line.unwrap_or(self.story_line),
            tags: patch.tags.unwrap_or(self.tags),
            director: patch.director.unwrap_or(self.director),
            writers: patch.writers.unwrap_or(self.writers),
            cast: patch.cast.unwrap_or(self.cast),
            release_date: patch.release_date.unwrap_or(self.release_date),
            status: patch.status.unwrap_or(self.status),
            movie_type: patch.movie_type.unwrap_or(self.movie_type),
            language: patch.language.unwrap_or(self.language),
            genre: patch.genre.unwrap_or(self.genre),
            poster: patch.poster.unwrap_or(self.poster),
            trailer: patch.trailer.unwrap_or(self.trailer),
        }
    }

    /// Whether any text field (selects included) is non-empty or any
    /// collection has an element.
    ///
    /// A director, poster or trailer on its own does not count.
    pub fn is_populated(&self) -> bool {
        let text = [&self.title, &self.story_line, &self.release_date];
        text.iter().any(|value| !value.is_empty())
            || !self.tags.is_empty()
            || !self.writers.is_empty()
            || !self.cast.is_empty()
            || !self.genre.is_empty()
            || self.status.is_some()
            || self.movie_type.is_some()
            || self.language.is_some()
    }

    /// The release date as shown in the date input, without any time part.
    pub fn release_date_display(&self) -> &str {
        self.release_date
            .split_once('T')
            .map_or(self.release_date.as_str(), |(date, _)| date)
    }

    pub fn release_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date_display(), "%Y-%m-%d").ok()
    }
}
