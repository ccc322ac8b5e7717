//! Slide content API

use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

/// Message returned for unknown and closed courses
pub const COURSE_UNAVAILABLE: &str = "Course not available";

/// Body of `GET /slides/:course`
///
/// Rejections are reported in the body with a 200 status; the page script
/// only inspects the `slides` field.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SlidesResponse {
    Slides { slides: Vec<String>, course: String },
    Unavailable { error: &'static str },
}

/// GET /slides/:course
pub async fn get_slides(
    State(state): State<AppState>,
    Path(course): Path<String>,
) -> Json<SlidesResponse> {
    if !state.registry.is_open(&course) {
        debug!("rejected slide request for course {:?}", course);
        return Json(SlidesResponse::Unavailable {
            error: COURSE_UNAVAILABLE,
        });
    }

    let paths = state.locator.locate(&course).await;
    let slides = signage_catalog::read_all(&paths).await;

    Json(SlidesResponse::Slides { slides, course })
}
