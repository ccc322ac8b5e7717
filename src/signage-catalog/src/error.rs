//! Catalog error types

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate course code: {0}")]
    DuplicateCourse(String),

    #[error("invalid course code: {0:?}")]
    InvalidCourseCode(String),
}
