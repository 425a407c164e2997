pub mod health;

use std::path::PathBuf;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::brand::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Brand API
        .route("/api/v1/analyze-brand", post(handlers::handle_analyze_brand))
        .route(
            "/api/v1/generate-guide",
            post(handlers::handle_generate_guide),
        )
        .route(
            "/api/v1/generate-content",
            post(handlers::handle_generate_content),
        )
        // Frontend bundle
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .with_state(state)
}
