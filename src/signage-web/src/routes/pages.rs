//! Landing page

use crate::{ApiError, AppState};
use anyhow::Context;
use askama::Template;
use axum::{extract::State, http::Uri, response::Html};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use signage_catalog::Course;
use std::path::Path;

/// Bytes left as-is in a URL path segment (RFC 3986 unreserved)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Slide files of one open course, as listed on the landing page
pub struct CourseSlides {
    pub code: String,
    pub slides: Vec<SlideLink>,
}

pub struct SlideLink {
    /// Path the slide was located at
    pub path: String,
    /// Where `/content` serves the raw file
    pub url: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    /// Every registered course, closed ones included
    pub courses: &'a [Course],
    /// Slide lists for open courses, in registry order
    pub all_slides: Vec<CourseSlides>,
    pub open_courses: Vec<&'a str>,
    /// `open_courses` as a JSON array for the page script
    pub open_courses_json: String,
    pub slide_duration_ms: u64,
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let open_courses = state.registry.list_open();

    let mut all_slides = Vec::with_capacity(open_courses.len());
    for code in &open_courses {
        let paths = state.locator.locate(code).await;
        all_slides.push(CourseSlides {
            code: code.to_string(),
            slides: paths.iter().map(|p| slide_link(code, p)).collect(),
        });
    }

    // Embedded in a <script> block
    let open_courses_json = serde_json::to_string(&open_courses)
        .context("encoding open course list")?
        .replace("</", "<\\/");

    let page = IndexTemplate {
        courses: state.registry.courses(),
        all_slides,
        open_courses,
        open_courses_json,
        slide_duration_ms: state.slide_duration_secs.saturating_mul(1000),
    };

    Ok(Html(page.render()?))
}

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

fn slide_link(code: &str, path: &Path) -> SlideLink {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    SlideLink {
        path: path.display().to_string(),
        url: format!(
            "/content/{}/{}",
            utf8_percent_encode(code, SEGMENT),
            utf8_percent_encode(&file_name, SEGMENT)
        ),
    }
}
