//! Reading and writing draft and record files.
//!
//! The format follows the extension: `.toml` or `.json`.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => bail!(
            "Unsupported file {}: expected a .toml or .json file",
            path.display()
        ),
    }
}

/// Load a draft or record from `path`.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = format_of(path)?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value = match format {
        Format::Toml => toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML in {}", path.display()))?,
        Format::Json => serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?,
    };

    Ok(value)
}

/// A draft or record file together with a local poster to upload.
///
/// A poster picked from disk cannot live inside the draft itself, so its
/// path is written next to the draft fields as `posterPath`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftFile<T> {
    #[serde(flatten)]
    pub content: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<PathBuf>,
}

/// Where a draft that failed to submit is kept: `<stem>.unsaved.json`
/// next to its source file.
pub fn unsaved_path(source: &Path) -> PathBuf {
    source.with_extension("unsaved.json")
}

/// Write `value` as pretty JSON.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize draft")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
