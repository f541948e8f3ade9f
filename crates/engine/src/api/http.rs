//! HTTP routes.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use snakeladder_shared::GameSnapshot;

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/game", get(get_game))
        .route("/api/roll", post(roll))
        .route("/api/reset", post(reset))
}

async fn health() -> &'static str {
    "OK"
}

async fn get_game(State(app): State<Arc<App>>) -> Json<GameSnapshot> {
    Json(app.session.get_state().await)
}

async fn roll(State(app): State<Arc<App>>) -> Json<GameSnapshot> {
    Json(app.session.roll().await)
}

async fn reset(State(app): State<Arc<App>>) -> Json<GameSnapshot> {
    Json(app.session.reset().await)
}

/// Fallback for unmatched paths.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (
                axum::http::StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": "Not found" })),
            )
                .into_response(),
        }
    }
}
