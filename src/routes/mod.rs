//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One page at `/` backed by a small JSON API per view session. Static
//! script and styles are served from the assets directory under `/assets`.

pub mod view;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(view::index))
        .route("/api/views/{id}/grid", post(view::render_grid))
        .route("/api/views/{id}/rows", get(view::rows))
        .route("/api/views/{id}/events", post(view::events))
        .route("/api/views/{id}/close", post(view::close))
        .route("/healthz", get(healthz))
        .nest_service("/assets", assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
