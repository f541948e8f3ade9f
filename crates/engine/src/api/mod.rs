//! API layer - HTTP and WebSocket entry points.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::app::App;

pub mod connections;
pub mod http;
pub mod websocket;

pub use connections::ConnectionManager;

/// Full router: JSON endpoints, the realtime socket and request tracing.
pub fn router(app: Arc<App>) -> Router {
    http::routes()
        .route("/ws", get(websocket::ws_handler))
        .fallback(http::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app)
}
