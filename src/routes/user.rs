//! User routes. `/users/create` is a static segment, so it wins over `/users/:id`
//! and a GET there is answered with 405 rather than reaching the id parser.
//! Leftover `/users/...` paths go to the fallback, which parses the whole remainder.

use crate::handlers::user::{create, list, read, read_unmatched};
use crate::state::AppState;
use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

/// `get(..)` also answers HEAD; these routes accept GET or POST only.
async fn reject_head(req: Request, next: Next) -> Response {
    if req.method() == Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    next.run(req).await
}

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list))
        .route("/users/create", post(create))
        .route("/users/:id", get(read))
        .route_layer(middleware::from_fn(reject_head))
        .fallback(read_unmatched)
        .with_state(state)
}
