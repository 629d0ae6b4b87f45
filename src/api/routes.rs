//! API route configuration.

use crate::api::handlers::{create_link_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /links/create` - Create a short link
/// - `GET  /health`       - Link store health check
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links/create", post(create_link_handler))
        .route("/health", get(health_handler))
}
