use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .merge(handlers::records::routes())
        .with_state(state)
}

pub fn create_page_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::render_page))
        .with_state(state)
}
