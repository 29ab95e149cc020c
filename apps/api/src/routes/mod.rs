pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Timeline API
        .route("/api/timeline", post(handlers::handle_create_timeline))
        .route(
            "/api/timeline/:id",
            get(handlers::handle_get_timeline).delete(handlers::handle_delete_timeline),
        )
        .route("/api/timelines", get(handlers::handle_list_timelines))
        // Career API
        .route("/api/career", post(handlers::handle_create_career))
        .route(
            "/api/career/:id",
            get(handlers::handle_get_career).delete(handlers::handle_delete_career),
        )
        .route("/api/careers", get(handlers::handle_list_careers))
        .with_state(state)
}
