use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("invalid cookie key: {0}")]
    CookieKey(String),

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // The wire only ever sees a generic message; detail stays in the log.
        match self {
            AppError::Database(e) => {
                error!(error = %e, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "database error").into_response()
            }
            AppError::Config(e) => {
                error!(error = %e, "configuration failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
            AppError::CookieKey(e) => {
                error!(error = %e, "cookie key failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
