use std::sync::Arc;

use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::container::Container;
use super::controller::{chat, health};

/// Open CORS policy: any origin, method, and header.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the HTTP surface:
/// - `GET /`, `HEAD /`: liveness payload
/// - `POST /chat`: one chat turn
pub fn build(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/", get(health).head(health))
        .route("/chat", post(chat))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}
