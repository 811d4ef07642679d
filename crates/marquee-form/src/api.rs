//! Movie backend client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use marquee_core::{MovieId, MovieRecord};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::payload::MoviePayload;

/// The backend operations the form submits to.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn create_movie(&self, payload: MoviePayload) -> ApiResult<MovieRecord>;

    async fn update_movie(&self, id: &MovieId, payload: MoviePayload) -> ApiResult<MovieRecord>;
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Error body sent with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Success bodies either wrap the movie or are the movie.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MovieEnvelope {
    Wrapped { movie: MovieRecord },
    Bare(MovieRecord),
}

/// Turn a response status and body into a movie or an [`ApiError`].
fn parse_movie_response(status: StatusCode, body: &str) -> ApiResult<MovieRecord> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|body| body.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let envelope: MovieEnvelope = serde_json::from_str(body).map_err(|e| ApiError::Parse {
        message: e.to_string(),
    })?;

    Ok(match envelope {
        MovieEnvelope::Wrapped { movie } | MovieEnvelope::Bare(movie) => movie,
    })
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for the movie endpoints.
///
/// Wraps a [`reqwest::Client`] with the marquee user agent and the
/// configured request timeout.
#[derive(Debug, Clone)]
pub struct HttpMovieApi {
    http: Client,
    base_url: String,
}

impl HttpMovieApi {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Create a client from the loaded configuration.
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MovieApi for HttpMovieApi {
    async fn create_movie(&self, payload: MoviePayload) -> ApiResult<MovieRecord> {
        let url = self.endpoint("movie/create");
        log::info!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .multipart(payload.into_multipart()?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_movie_response(status, &body)
    }

    async fn update_movie(&self, id: &MovieId, payload: MoviePayload) -> ApiResult<MovieRecord> {
        let url = self.endpoint(&format!("movie/update/{id}"));
        log::info!("PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .multipart(payload.into_multipart()?)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_movie_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpMovieApi::new("http://localhost:8000/api/", Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = HttpMovieApi::new("http://localhost:8000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.endpoint("movie/create"),
            "http://localhost:8000/api/movie/create"
        );
        assert_eq!(client.base_url(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_client_from_config() {
        let client = HttpMovieApi::from_config(&Config::default()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_parse_wrapped_movie() {
        let body = r#"{"movie": {"id": "64f0", "title": "Interstellar"}}"#;
        let record = parse_movie_response(StatusCode::CREATED, body).unwrap();
        assert_eq!(record.id, MovieId::from("64f0"));
        assert_eq!(record.draft.title, "Interstellar");
    }

    #[test]
    fn test_parse_bare_movie() {
        let body = r#"{"_id": "64f0", "title": "Interstellar", "genre": ["Drama"]}"#;
        let record = parse_movie_response(StatusCode::OK, body).unwrap();
        assert_eq!(record.id, MovieId::from("64f0"));
        assert_eq!(record.draft.genre.len(), 1);
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "Movie not found!"}"#;
        let err = parse_movie_response(StatusCode::NOT_FOUND, body).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Rejected { status: 404, ref message } if message == "Movie not found!"
        ));
    }

    #[test]
    fn test_parse_error_without_body_uses_reason() {
        let err = parse_movie_response(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(err.user_message(), "Bad Gateway");
    }

    #[test]
    fn test_parse_unreadable_success_body() {
        let err = parse_movie_response(StatusCode::OK, r#"{"message": "ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
    }
}
