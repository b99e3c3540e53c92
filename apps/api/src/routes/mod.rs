pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/resume",
            get(handlers::handle_get_resume)
                .post(handlers::handle_create_resume)
                .layer(DefaultBodyLimit::disable()),
        )
        .with_state(state)
}
