use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/form", get(handlers::get_form))
        .route("/api/form/field", post(handlers::set_field))
        .route("/api/form/submit", post(handlers::submit))
        .route("/api/visualize", post(handlers::visualize))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
