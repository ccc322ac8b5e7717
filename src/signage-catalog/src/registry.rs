//! Static course registry

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A course whose slides may be shown on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Short identifier, also the name of the course's content directory
    pub code: String,

    /// Human-readable course name
    #[serde(rename = "name")]
    pub display_name: String,

    /// Whether the course is publicly viewable
    #[serde(default = "default_open")]
    pub open: bool,
}

fn default_open() -> bool { true }

impl Course {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>, open: bool) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            open,
        }
    }
}

/// Read-only course lookup, built once at startup
///
/// Iteration order is the order the courses were supplied in.
#[derive(Debug, Clone)]
pub struct CourseRegistry {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl CourseRegistry {
    /// Build a registry, rejecting duplicate or unusable course codes
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(courses.len());

        for (position, course) in courses.iter().enumerate() {
            validate_code(&course.code)?;
            if index.insert(course.code.clone(), position).is_some() {
                return Err(CatalogError::DuplicateCourse(course.code.clone()));
            }
        }

        Ok(Self { courses, index })
    }

    pub fn get(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&i| &self.courses[i])
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// True only for registered courses flagged open
    pub fn is_open(&self, code: &str) -> bool {
        self.get(code).map(|c| c.open).unwrap_or(false)
    }

    /// Codes of all open courses, in registration order
    pub fn list_open(&self) -> Vec<&str> {
        self.courses
            .iter()
            .filter(|c| c.open)
            .map(|c| c.code.as_str())
            .collect()
    }

    /// All courses, open or not, in registration order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for CourseRegistry {
    fn default() -> Self {
        let courses = vec![
            Course::new("it", "Informatika", true),
            Course::new("ar", "Arapski jezik", true),
            Course::new("eng", "Engleski jezik", true),
            Course::new("cal", "Kaligrafija", true),
        ];
        let index = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.code.clone(), i))
            .collect();

        Self { courses, index }
    }
}

/// Course codes are joined onto the content directory, so they must name a
/// single plain path segment
fn validate_code(code: &str) -> Result<(), CatalogError> {
    let invalid = code.is_empty()
        || code == "."
        || code == ".."
        || code.contains(['/', '\\'])
        || code.chars().any(char::is_control);

    if invalid {
        return Err(CatalogError::InvalidCourseCode(code.to_string()));
    }
    Ok(())
}
