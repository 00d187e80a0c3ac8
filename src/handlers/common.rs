//! Health and readiness handlers.

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;

/// Any method on /health.
pub async fn health() -> &'static str {
    "Health check passed"
}

/// GET /ready: 200 only while the store answers a ping.
pub async fn ready(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "readiness check failed");
        AppError::Unavailable
    })?;
    Ok("Ready")
}
