//! Common routes: health and readiness.

use crate::handlers::common::{health, ready};
use crate::state::AppState;
use axum::{routing::any, routing::get, Router};

/// Common routes (no state): any /health.
pub fn common_routes() -> Router {
    Router::new().route("/health", any(health))
}

/// Common routes including readiness with a store ping. Requires AppState.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
        .merge(common_routes())
}
