//! Poster preview references.
//!
//! A locally selected poster is shown through a short-lived URL handed out
//! by a [`PreviewStore`]. Every URL acquired for a file must be released
//! once a newer poster supersedes it or the form goes away; [`PreviewSlot`]
//! owns that bookkeeping. Previews of already uploaded posters point at the
//! remote URL and are never released.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use marquee_core::PosterFile;
use uuid::Uuid;

/// Hands out and invalidates preview URLs for local files.
pub trait PreviewStore: Send + Sync + fmt::Debug {
    fn acquire(&self, file: &PosterFile) -> String;
    fn release(&self, url: &str);
}

/// In-memory store issuing `blob:marquee/<uuid>` URLs.
#[derive(Debug, Default)]
pub struct ObjectUrlStore {
    live: Mutex<HashMap<String, String>>,
}

impl ObjectUrlStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of URLs acquired and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(url)
    }

    /// File name behind a live URL.
    pub fn file_name(&self, url: &str) -> Option<String> {
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned()
    }
}

impl PreviewStore for ObjectUrlStore {
    fn acquire(&self, file: &PosterFile) -> String {
        let url = format!("blob:marquee/{}", Uuid::new_v4());
        log::debug!("Acquired preview {} for {}", url, file.file_name);
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.clone(), file.file_name.clone());
        url
    }

    fn release(&self, url: &str) {
        let removed = self
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(url);
        if removed.is_none() {
            log::warn!("Released unknown preview {}", url);
        }
    }
}

/// What the poster area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// URL acquired from the preview store for a pending file.
    Local(String),
    /// URL of an uploaded poster.
    Remote(String),
}

impl Preview {
    pub fn url(&self) -> &str {
        match self {
            Self::Local(url) | Self::Remote(url) => url,
        }
    }
}

/// The form's single preview, released when replaced or dropped.
#[derive(Debug)]
pub struct PreviewSlot {
    store: Arc<dyn PreviewStore>,
    current: Option<Preview>,
}

impl PreviewSlot {
    #[must_use]
    pub fn new(store: Arc<dyn PreviewStore>) -> Self {
        Self {
            store,
            current: None,
        }
    }

    pub fn show_file(&mut self, file: &PosterFile) {
        let url = self.store.acquire(file);
        self.replace(Some(Preview::Local(url)));
    }

    pub fn show_remote(&mut self, url: impl Into<String>) {
        self.replace(Some(Preview::Remote(url.into())));
    }

    pub fn clear(&mut self) {
        self.replace(None);
    }

    pub fn current(&self) -> Option<&Preview> {
        self.current.as_ref()
    }

    pub fn url(&self) -> Option<&str> {
        self.current.as_ref().map(Preview::url)
    }

    fn replace(&mut self, next: Option<Preview>) {
        if let Some(Preview::Local(url)) = std::mem::replace(&mut self.current, next) {
            self.store.release(&url);
        }
    }
}

impl Drop for PreviewSlot {
    fn drop(&mut self) {
        self.clear();
    }
}
