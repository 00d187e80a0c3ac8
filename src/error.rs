//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("load .env: {0}")]
    DotEnv(#[from] dotenvy::Error),
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid environment variable {name}: {reason}")]
    InvalidVar { name: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid user id")]
    InvalidUserId,
    #[error("user not found")]
    UserNotFound,
    #[error("read request body: {0}")]
    BodyRead(String),
    #[error("decode request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
    #[error("duplicate user id {0}")]
    DuplicateUser(i64),
    #[error("insert user: {0}")]
    Insert(sqlx::Error),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("database unavailable")]
    Unavailable,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidUserId => StatusCode::BAD_REQUEST,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
            AppError::BodyRead(_)
            | AppError::InvalidBody(_)
            | AppError::DuplicateUser(_)
            | AppError::Insert(_)
            | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Short plain-text message sent to the client. Never includes driver detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidUserId => "Invalid user ID",
            AppError::InvalidBody(_) => "Error decoding request body",
            AppError::UserNotFound => "User not found",
            AppError::BodyRead(_) => "Error reading request body",
            AppError::DuplicateUser(_) | AppError::Insert(_) => "Error executing statement",
            AppError::Db(_) => "Internal server error",
            AppError::Unavailable => "Database unavailable",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(AppError::InvalidUserId.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::UserNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn decode_failure_is_a_server_error() {
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(decode);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Error decoding request body");
    }

    #[test]
    fn insert_failures_share_one_message() {
        assert_eq!(
            AppError::DuplicateUser(1).public_message(),
            AppError::Insert(sqlx::Error::PoolClosed).public_message()
        );
        assert_eq!(
            AppError::Insert(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_is_a_server_error_not_404() {
        // get_user maps absence to Option::None before it reaches AppError
        assert_eq!(
            AppError::Db(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
