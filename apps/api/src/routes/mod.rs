pub mod health;
pub mod reference;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/reference", get(reference::reference_handler))
        .route(
            "/api/v1/recommendations",
            post(recommend_handlers::handle_recommend),
        )
        .route("/api/v1/auth/signup", post(auth_handlers::handle_signup))
        .route("/api/v1/auth/login", post(auth_handlers::handle_login))
        .with_state(state)
}
