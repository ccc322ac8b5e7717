//! Signage web server - landing page and slide API

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{router, serve};
pub use state::AppState;
