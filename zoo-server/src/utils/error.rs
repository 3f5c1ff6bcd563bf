//! 统一错误处理
//!
//! [`AppError`] is what handlers return. It renders itself as an HTML
//! fragment so every failure the server produces looks like the rest of the
//! site:
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `NotFound(kind)` | 404 | `404 {kind} not found` |
//! | `Database` | 500 | generic server error page |
//! | `Internal` | 500 | generic server error page |
//!
//! Server-side details are logged, never sent to the client.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::db::models::EntityKind;
use crate::db::repository::RepoError;
use crate::views;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0} not found")]
    /// No row with the requested id (404)
    NotFound(EntityKind),

    #[error("Database error: {0}")]
    /// Storage unreachable or query failed (500)
    Database(String),

    #[error("Internal error: {0}")]
    /// Anything else that is not the client's fault (500)
    Internal(String),
}

/// Result type for handlers and services
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::NotFound(kind) => views::not_found(*kind),
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                views::server_error()
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                views::server_error()
            }
        };

        (status, Html(body.into_string())).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
