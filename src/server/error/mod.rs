//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers and services. It wraps the
//! domain-specific errors and implements `IntoResponse`, producing
//! `{ "success": false, "message": ... }` bodies with the matching status code.

pub mod auth;
pub mod config;
pub mod media;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, media::MediaError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors with their own
/// status mapping (`AuthError`, `MediaError`) are delegated to, generic variants map to
/// the standard status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Always results in 500 Internal Server Error.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 / 403 / 400).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Media storage error.
    ///
    /// Validation failures map to 400, a missing file to 404, I/O failures to 500.
    #[error(transparent)]
    MediaErr(#[from] MediaError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token encoding failure from jsonwebtoken.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// File system or socket error outside the media store.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but may not touch the resource.
    ///
    /// Results in 403 Forbidden with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged; the client receives a generic one.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest` and media validation failures
/// - 403 Forbidden - `Forbidden`
/// - 404 Not Found - `NotFound` and missing media files
/// - 500 Internal Server Error - everything else, with a generic message
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(ErrorDto::new(msg))).into_response(),
            Self::MediaErr(MediaError::NotFound(name)) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new(format!("File {} not found", name))),
            )
                .into_response(),
            Self::MediaErr(MediaError::Io(err)) => InternalServerError(err).into_response(),
            Self::MediaErr(err) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(err.to_string()))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}
