//! Route tables and the assembled application router.

mod common;
mod user;

pub use common::{common_routes, common_routes_with_ready};
pub use user::user_routes;

use crate::handlers::user::MAX_BODY_BYTES;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full service: user routes, common routes, body cap and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(user_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
}
