//! Axum server setup and routing

use crate::routes;
use crate::state::AppState;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router
///
/// `/static` serves front-end assets from `static_dir`; `/content` exposes the
/// raw slide directory the locator reads from.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let content_dir = state.locator.content_dir().to_path_buf();

    Router::new()
        .route("/", get(routes::index))
        .route("/slides/:course", get(routes::get_slides))
        // Pass-through file serving
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .nest_service("/content", ServeDir::new(content_dir))
        .fallback(routes::not_found)
        .with_state(state)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Start the web server and run until Ctrl+C
pub async fn serve(
    state: AppState,
    static_dir: impl AsRef<Path>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let open_courses = state.registry.list_open().len();
    let app = router(state, static_dir);

    info!("starting signage server on http://{}", addr);
    info!("{} open courses", open_courses);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
