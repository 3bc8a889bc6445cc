//! Storage failure classification for the repository layer.
//!
//! Every `DbErr` raised by a repository is inspected once, at the storage boundary, and
//! mapped onto one of three kinds. Only the rendered message of the original failure is
//! kept so no driver type crosses into the service layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A uniqueness constraint rejected the write.
    ///
    /// Raised for a second player with the same id, a second registration of a player on
    /// the same server, or an existing friendship edge. Callers treat it as "already exists".
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// The requested row does not exist.
    ///
    /// Raised for single-row lookups that match nothing and for membership inserts that
    /// reference an unknown player through the foreign key.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connection, transaction or any other storage failure unrelated to business rules.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::DuplicateKey(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::NotFound(msg),
            _ => match err {
                DbErr::RecordNotFound(msg) => Self::NotFound(msg),
                err => Self::Unavailable(err.to_string()),
            },
        }
    }
}

/// Converts repository errors into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For `DuplicateKey`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `Unavailable`, with the detail logged and a generic
///   message returned to the client
impl IntoResponse for RepositoryError {
    fn into_response(self) -> Response {
        match self {
            Self::DuplicateKey(_) => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "Already exists".to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Not found".to_string(),
                }),
            )
                .into_response(),
            Self::Unavailable(msg) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
