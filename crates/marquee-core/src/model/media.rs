use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// An image or video already uploaded to the media host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
}

impl MediaRef {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            public_id: None,
        }
    }

    #[must_use]
    pub fn with_public_id(mut self, public_id: impl Into<String>) -> Self {
        self.public_id = Some(public_id.into());
        self
    }
}

/// Wire shape of a media reference. The backend sends `{}` or `null` for
/// "no media", so `url` has to be optional here.
#[derive(Deserialize)]
struct RawMediaRef {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    public_id: Option<String>,
}

impl RawMediaRef {
    fn into_media_ref(self) -> Option<MediaRef> {
        match self.url {
            Some(url) if !url.is_empty() => Some(MediaRef {
                url,
                public_id: self.public_id,
            }),
            _ => None,
        }
    }
}

/// Serde adapter for `Option<MediaRef>` fields that treats `{}`, `null`, and
/// a blank url as absent.
pub mod lenient {
    use super::{MediaRef, RawMediaRef};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<MediaRef>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<MediaRef>, D::Error> {
        let raw = Option::<RawMediaRef>::deserialize(deserializer)?;
        Ok(raw.and_then(RawMediaRef::into_media_ref))
    }
}

/// A poster image selected locally and not yet uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct PosterFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PosterFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Read a poster image from disk.
    ///
    /// Only JPEG, PNG and WebP images are accepted; the MIME type is taken
    /// from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] for an unsupported extension and
    /// [`Error::Io`] when the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let mime = image_mime(&extension).ok_or_else(|| {
            Error::InvalidData(format!(
                "unsupported poster format: {}",
                path.display()
            ))
        })?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("poster")
            .to_string();

        let bytes = std::fs::read(path)?;
        log::debug!("Read poster {} ({} bytes)", file_name, bytes.len());

        Ok(Self::new(file_name, mime, bytes))
    }
}

fn image_mime(extension: &str) -> Option<&'static str> {
    match extension {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

impl fmt::Debug for PosterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosterFile")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The poster slot of a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Poster {
    #[default]
    Empty,
    /// Unchanged poster of a persisted record.
    Existing(MediaRef),
    /// Newly selected file, uploaded with the submission.
    Pending(PosterFile),
}

impl Poster {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Existing(media) => Some(&media.url),
            Self::Empty | Self::Pending(_) => None,
        }
    }
}

#[derive(Serialize)]
struct PendingPosterSummary<'a> {
    file_name: &'a str,
    mime: &'a str,
}

impl Serialize for Poster {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_none(),
            Self::Existing(media) => media.serialize(serializer),
            Self::Pending(file) => PendingPosterSummary {
                file_name: &file.file_name,
                mime: &file.mime,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Poster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let media = lenient::deserialize(deserializer)?;
        Ok(media.map_or(Self::Empty, Self::Existing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_poster_deserialize_empty_object() {
        let poster: Poster = serde_json::from_str("{}").unwrap();
        assert!(poster.is_empty());
    }

    #[test]
    fn test_poster_deserialize_existing() {
        let poster: Poster =
            serde_json::from_str(r#"{"url": "http://x/y.jpg", "public_id": "y"}"#).unwrap();
        assert_eq!(
            poster,
            Poster::Existing(MediaRef::new("http://x/y.jpg").with_public_id("y"))
        );
        assert_eq!(poster.url(), Some("http://x/y.jpg"));
    }

    #[test]
    fn test_pending_poster_serializes_without_bytes() {
        let poster = Poster::Pending(PosterFile::new("a.png", "image/png", vec![1, 2, 3]));
        let json = serde_json::to_value(&poster).unwrap();
        assert_eq!(json["file_name"], "a.png");
        assert!(json.get("bytes").is_none());
    }

    #[test]
    fn test_poster_file_debug_hides_bytes() {
        let file = PosterFile::new("a.png", "image/png", vec![0; 2048]);
        let debug = format!("{file:?}");
        assert!(debug.contains("len: 2048"));
    }

    #[test]
    fn test_poster_file_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Interstellar.JPG");
        std::fs::write(&path, b"fake-jpeg").unwrap();

        let file = PosterFile::from_path(&path).unwrap();
        assert_eq!(file.file_name, "Interstellar.JPG");
        assert_eq!(file.mime, "image/jpeg");
        assert_eq!(file.bytes, b"fake-jpeg");
    }

    #[test]
    fn test_poster_file_rejects_unknown_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("poster.gif");
        std::fs::write(&path, b"gif").unwrap();

        let result = PosterFile::from_path(&path);
        assert!(matches!(result, Err(Error::InvalidData(_))));
    }
}
