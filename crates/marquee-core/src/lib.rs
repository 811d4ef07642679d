//! Core domain model for marquee.
//!
//! This crate defines the movie draft aggregate edited by the admin form,
//! the persisted record it is hydrated from, people and cast credits, media
//! references, the fixed option sets, and draft validation.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod options;
pub mod validate;

pub use error::{Error, Result, ValidationError};
pub use model::{
    CastMember, DraftPatch, MediaRef, MovieDraft, MovieId, MovieRecord, Person, PersonId, Poster,
    PosterFile,
};
pub use options::{Genre, Language, MovieType, Status};
pub use validate::{DraftValidator, Validator};
