//! Catalog inspection used by the `courses` and `check` subcommands

use signage_catalog::{load, CourseRegistry, SlideContent, SlideLocator};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One registry row with its on-disk slide count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSummary {
    pub code: String,
    pub name: String,
    pub open: bool,
    pub slide_count: usize,
}

/// Slide health of one open course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCheck {
    pub code: String,
    pub slide_count: usize,
    /// Slides that would be served as error placeholders
    pub unreadable: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub content_dir: PathBuf,
    pub content_dir_exists: bool,
    pub static_dir: PathBuf,
    pub static_dir_exists: bool,
    pub courses: Vec<CourseCheck>,
}

impl CheckReport {
    /// A missing content root is the only condition that fails the check;
    /// empty decks and unreadable slides are reported but still served
    pub fn is_healthy(&self) -> bool {
        self.content_dir_exists
    }

    pub fn unreadable_count(&self) -> usize {
        self.courses.iter().map(|c| c.unreadable.len()).sum()
    }
}

/// Every registered course with the number of slides found for it
pub async fn summarize(registry: &CourseRegistry, locator: &SlideLocator) -> Vec<CourseSummary> {
    let mut rows = Vec::with_capacity(registry.len());
    for course in registry.courses() {
        rows.push(CourseSummary {
            code: course.code.clone(),
            name: course.display_name.clone(),
            open: course.open,
            slide_count: locator.locate(&course.code).await.len(),
        });
    }
    rows
}

/// Inspect directories and try loading every slide of every open course
pub async fn check(
    registry: &CourseRegistry,
    locator: &SlideLocator,
    static_dir: &Path,
) -> CheckReport {
    let content_dir = locator.content_dir().to_path_buf();
    let content_dir_exists = content_dir.is_dir();
    let static_dir_exists = static_dir.is_dir();

    if !content_dir_exists {
        warn!("content directory {:?} does not exist", content_dir);
    }
    if !static_dir_exists {
        warn!("static directory {:?} does not exist", static_dir);
    }

    let mut courses = Vec::new();
    for code in registry.list_open() {
        let paths = locator.locate(code).await;
        let mut unreadable = Vec::new();

        for path in &paths {
            if let SlideContent::Placeholder { path, .. } = load(path).await {
                unreadable.push(path);
            }
        }

        debug!("course {}: {} slides, {} unreadable", code, paths.len(), unreadable.len());
        courses.push(CourseCheck {
            code: code.to_string(),
            slide_count: paths.len(),
            unreadable,
        });
    }

    CheckReport {
        content_dir,
        content_dir_exists,
        static_dir: static_dir.to_path_buf(),
        static_dir_exists,
        courses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signage_catalog::Course;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> CourseRegistry {
        CourseRegistry::new(vec![
            Course::new("it", "Informatika", true),
            Course::new("x", "Zatvoreno", false),
            Course::new("ar", "Arapski jezik", true),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_summarize_counts_all_courses() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("it")).unwrap();
        fs::create_dir_all(tmp.path().join("x")).unwrap();
        fs::write(tmp.path().join("it/a.html"), "A").unwrap();
        fs::write(tmp.path().join("it/b.html"), "B").unwrap();
        fs::write(tmp.path().join("x/a.html"), "X").unwrap();

        let rows = summarize(&registry(), &SlideLocator::new(tmp.path())).await;

        let counts: Vec<_> = rows
            .iter()
            .map(|r| (r.code.as_str(), r.open, r.slide_count))
            .collect();
        assert_eq!(counts, vec![("it", true, 2), ("x", false, 1), ("ar", true, 0)]);
    }

    #[tokio::test]
    async fn test_check_reports_unreadable_slides() {
        let tmp = TempDir::new().unwrap();
        let content = tmp.path().join("content");
        fs::create_dir_all(content.join("it")).unwrap();
        fs::write(content.join("it/a.html"), "A").unwrap();
        fs::write(content.join("it/b.html"), [0xffu8, 0xfe]).unwrap();

        let static_dir = tmp.path().join("static");
        let report = check(&registry(), &SlideLocator::new(&content), &static_dir).await;

        assert!(report.is_healthy());
        assert!(!report.static_dir_exists);
        assert_eq!(report.courses.len(), 2);
        assert_eq!(report.courses[0].slide_count, 2);
        assert_eq!(report.courses[0].unreadable, vec![content.join("it/b.html")]);
        assert_eq!(report.unreadable_count(), 1);
    }

    #[tokio::test]
    async fn test_check_missing_content_dir() {
        let tmp = TempDir::new().unwrap();
        let report = check(
            &registry(),
            &SlideLocator::new(tmp.path().join("missing")),
            tmp.path(),
        )
        .await;

        assert!(!report.is_healthy());
        assert!(report.courses.iter().all(|c| c.slide_count == 0));
    }
}
