use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature or claims could not be verified.
    #[error("Invalid token")]
    InvalidToken,

    /// Token verified but its `exp` claim is in the past.
    #[error("Token expired")]
    TokenExpired,

    /// Token subject does not match any stored user.
    #[error("User {0} referenced by token not found")]
    UserNotFound(i32),

    /// User exists but has been deactivated.
    #[error("User {0} is inactive")]
    UserInactive(i32),

    /// User lacks a permission required by the endpoint.
    #[error("User {0} is missing a required permission")]
    AccessDenied(i32),

    /// Email and password do not match a stored account.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `TokenExpired` / `UserNotFound` → 401 Unauthorized
/// - `UserInactive` / `AccessDenied` → 403 Forbidden
/// - `InvalidCredentials` → 400 Bad Request with a generic message
///
/// Details are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken | Self::UserNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
            Self::UserInactive(_) => (StatusCode::FORBIDDEN, "Account is inactive"),
            Self::AccessDenied(_) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid email or password"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
