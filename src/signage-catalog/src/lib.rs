//! signage-catalog - Course registry and slide file access
//!
//! Knows which courses exist, which of them are open, and how to turn a
//! course's content directory into an ordered list of slide fragments.

mod error;
mod locator;
mod reader;
mod registry;

pub use error::CatalogError;
pub use locator::SlideLocator;
pub use reader::{load, placeholder_markup, read, read_all, SlideContent};
pub use registry::{Course, CourseRegistry};
