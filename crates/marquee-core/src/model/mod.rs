pub mod draft;
pub mod ids;
pub mod media;
pub mod person;
pub mod record;

pub use draft::{DraftPatch, MovieDraft};
pub use ids::{MovieId, PersonId};
pub use media::{MediaRef, Poster, PosterFile};
pub use person::{CastMember, Person};
pub use record::MovieRecord;
