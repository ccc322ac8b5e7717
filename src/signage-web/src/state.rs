//! Shared application state

use signage_catalog::{CourseRegistry, SlideLocator};
use std::sync::Arc;

/// Shared state across all handlers; read-only after startup
#[derive(Clone)]
pub struct AppState {
    /// Known courses and their open flags
    pub registry: Arc<CourseRegistry>,

    /// Resolves course codes to slide files under the content directory
    pub locator: SlideLocator,

    /// How long the page shows each slide before rotating
    pub slide_duration_secs: u64,
}

impl AppState {
    /// Create new application state
    pub fn new(
        registry: CourseRegistry,
        locator: SlideLocator,
        slide_duration_secs: u64,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            locator,
            slide_duration_secs,
        }
    }
}
