//! Movie form engine for marquee.
//!
//! Holds the in-progress draft, applies field updates with the form's
//! dedupe rules, tracks the dirty signal and poster previews, encodes the
//! draft into a multipart payload, and drives create/update submissions
//! against the backend API.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod api;
pub mod config;
pub mod dirty;
pub mod error;
pub mod form;
pub mod handlers;
pub mod payload;
pub mod preview;
pub mod signals;
pub mod submit;

pub use api::{HttpMovieApi, MovieApi};
pub use config::Config;
pub use error::{ApiError, ApiResult, FormError, FormResult};
pub use form::MovieForm;
pub use handlers::DraftField;
pub use payload::{MoviePayload, PayloadValue};
pub use preview::{ObjectUrlStore, Preview, PreviewStore};
pub use signals::{FormEvents, NoticeKind, Notifier};
pub use submit::{PendingSubmission, SubmissionState, SubmissionTarget, SubmitOutcome};
