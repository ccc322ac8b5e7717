//! Slide file enumeration
//!
//! A course's slides are the `*.html` files directly inside
//! `<content_dir>/<course_code>/`. Hidden files are skipped, matching shell
//! glob behaviour. Nothing is cached; every call lists the directory again.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SLIDE_EXTENSION: &str = ".html";

/// Finds slide files under a content root
#[derive(Debug, Clone)]
pub struct SlideLocator {
    content_dir: PathBuf,
}

impl SlideLocator {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Directory holding a course's slides
    pub fn slide_dir(&self, course_code: &str) -> PathBuf {
        self.content_dir.join(course_code)
    }

    /// List a course's slide files, sorted by full path
    ///
    /// A missing or unreadable directory yields no slides.
    pub async fn locate(&self, course_code: &str) -> Vec<PathBuf> {
        let dir = self.slide_dir(course_code);

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no slide directory at {:?}", dir);
                return Vec::new();
            }
            Err(e) => {
                warn!("cannot list slide directory {:?}: {}", dir, e);
                return Vec::new();
            }
        };

        let mut slides = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    if is_slide_name(&entry.file_name().to_string_lossy()) {
                        slides.push(entry.path());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("error while listing {:?}: {}", dir, e);
                    break;
                }
            }
        }

        slides.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        debug!("found {} slides for course {}", slides.len(), course_code);
        slides
    }
}

fn is_slide_name(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(SLIDE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_slide_name_filter() {
        assert!(is_slide_name("01-intro.html"));
        assert!(!is_slide_name(".hidden.html"));
        assert!(!is_slide_name("notes.txt"));
        assert!(!is_slide_name("slide.html.bak"));
        assert!(!is_slide_name("slide.HTML"));
    }

    #[tokio::test]
    async fn test_locate_sorts_by_name() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("it");
        fs::create_dir(&dir).unwrap();
        for name in ["b.html", "a.html", "10.html", "2.html", "readme.md"] {
            fs::write(dir.join(name), name).unwrap();
        }

        let locator = SlideLocator::new(tmp.path());
        let slides = locator.locate("it").await;

        assert_eq!(names(&slides), vec!["10.html", "2.html", "a.html", "b.html"]);
        assert!(slides.iter().all(|p| p.starts_with(&dir)));
    }

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let locator = SlideLocator::new(tmp.path());
        assert!(locator.locate("nope").await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("it")).unwrap();
        let locator = SlideLocator::new(tmp.path());
        assert!(locator.locate("it").await.is_empty());
    }

    #[tokio::test]
    async fn test_new_files_picked_up_on_next_call() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("it");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("a.html"), "A").unwrap();

        let locator = SlideLocator::new(tmp.path());
        assert_eq!(locator.locate("it").await.len(), 1);

        fs::write(dir.join("b.html"), "B").unwrap();
        assert_eq!(names(&locator.locate("it").await), vec!["a.html", "b.html"]);
    }

    #[tokio::test]
    async fn test_content_dir_that_is_a_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("it"), "not a directory").unwrap();
        let locator = SlideLocator::new(tmp.path());
        assert!(locator.locate("it").await.is_empty());
    }
}
