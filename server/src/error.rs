use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reviews::review::ValidationError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Sign-in required")]
    Unauthorized,

    #[error("Review not found")]
    NotFound,

    #[error("Store error: {0}")]
    Store(#[from] meilisearch_sdk::errors::Error),

    #[error("Session database error: {0}")]
    Session(#[from] redis::RedisError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Invalid { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store { .. } => StatusCode::BAD_GATEWAY,
            AppError::Session { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("{self}");
        }

        (status, self.to_string()).into_response()
    }
}
