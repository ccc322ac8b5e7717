//! Slide content loading with per-file fallback

use std::path::{Path, PathBuf};
use tracing::error;

/// Outcome of loading one slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideContent {
    /// File contents, untouched
    Loaded(String),

    /// The file could not be read or was not valid UTF-8
    Placeholder { path: PathBuf, reason: String },
}

impl SlideContent {
    pub fn is_loaded(&self) -> bool {
        matches!(self, SlideContent::Loaded(_))
    }

    /// Markup to hand to the client: the slide itself or an error fragment
    pub fn into_markup(self) -> String {
        match self {
            SlideContent::Loaded(content) => content,
            SlideContent::Placeholder { path, .. } => placeholder_markup(&path),
        }
    }
}

/// Fragment shown in place of a slide that failed to load
pub fn placeholder_markup(path: &Path) -> String {
    format!(
        "<div class='error'>Error loading slide: {}</div>",
        path.display()
    )
}

/// Load a slide, logging and capturing any failure
pub async fn load(path: &Path) -> SlideContent {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => SlideContent::Loaded(content),
        Err(e) => {
            error!("error reading slide file {:?}: {}", path, e);
            SlideContent::Placeholder {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}

/// Slide markup for `path`; never fails
pub async fn read(path: &Path) -> String {
    load(path).await.into_markup()
}

/// Read slides in the given order
pub async fn read_all(paths: &[PathBuf]) -> Vec<String> {
    let mut slides = Vec::with_capacity(paths.len());
    for path in paths {
        slides.push(read(path).await);
    }
    slides
}
