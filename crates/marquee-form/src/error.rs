//! Error types for the form engine and the backend client.

use marquee_core::ValidationError;
use thiserror::Error;

/// Errors returned by the movie backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("backend rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A success response could not be parsed.
    #[error("parse error: {message}")]
    Parse { message: String },
}

impl ApiError {
    /// The text shown to the user in an error notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Request(_) | Self::Parse { .. } => self.to_string(),
        }
    }
}

/// Convenience alias for backend client results.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors surfaced by form operations.
#[derive(Debug, Error)]
pub enum FormError {
    /// The draft failed validation; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The submission reached the backend and failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("no submission is in progress")]
    NotSubmitting,

    #[error(transparent)]
    Core(#[from] marquee_core::Error),
}

impl FormError {
    /// Returns `true` when the failure happened before any network call.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Api(_))
    }
}

/// Convenience alias for form results.
pub type FormResult<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_user_message_is_backend_text() {
        let err = ApiError::Rejected {
            status: 401,
            message: "Unauthorized access!".to_string(),
        };
        assert_eq!(err.user_message(), "Unauthorized access!");
        assert_eq!(
            err.to_string(),
            "backend rejected request (401): Unauthorized access!"
        );
    }

    #[test]
    fn test_validation_error_is_local() {
        let err = FormError::from(ValidationError::new("Title is missing!"));
        assert!(err.is_local());
        assert_eq!(err.to_string(), "validation failed: Title is missing!");

        let err = FormError::from(ApiError::Parse {
            message: "eof".to_string(),
        });
        assert!(!err.is_local());
    }
}
