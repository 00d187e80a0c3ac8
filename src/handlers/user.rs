//! User handlers: list, read by id, create.

use crate::error::AppError;
use crate::model::User;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

/// Upper bound for a create body; the router's limit layer enforces the same cap.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

const USERS_PREFIX: &str = "/users/";

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::InvalidUserId)
}

async fn read_by_id_str(state: &AppState, id_str: &str) -> Result<Json<User>, AppError> {
    let id = parse_id(id_str)?;
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or(AppError::UserNotFound)?;
    Ok(Json(user))
}

/// GET /users
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.store.list_users().await?;
    tracing::debug!(count = users.len(), "listed users");
    Ok(Json(users))
}

/// GET /users/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<User>, AppError> {
    read_by_id_str(&state, &id_str).await
}

/// Fallback for paths no route matched. Anything under `/users/` (`/users/`,
/// `/users/1/2`, `/users/create/`) is read with the whole remainder as the id,
/// so it ends in 400 rather than 404.
pub async fn read_unmatched(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let Some(id_str) = uri.path().strip_prefix(USERS_PREFIX) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if method != Method::GET {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    read_by_id_str(&state, id_str).await.into_response()
}

/// POST /users/create. The body is read by hand so read failures and decode
/// failures get their own responses instead of the `Json` extractor's rejection.
pub async fn create(
    State(state): State<AppState>,
    body: Body,
) -> Result<impl IntoResponse, AppError> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::BodyRead(e.to_string()))?;
    let user: User = serde_json::from_slice(&bytes)?;
    state.store.create_user(&user).await?;
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::OK, "User created successfully"))
}
