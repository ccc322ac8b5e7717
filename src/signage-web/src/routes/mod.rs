//! HTTP route handlers

pub mod pages;
pub mod slides;

pub use pages::*;
pub use slides::*;
