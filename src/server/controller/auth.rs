use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{
            AccessTokenDto, LoginDto, RefreshTokenDto, RegisterDto, TokenPairDto, VerifiedTokenDto,
            VerifyTokenDto,
        },
        user::UserResponseDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::{AuthService, RegisterParams, TokenPair},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn token_pair_dto(tokens: TokenPair) -> TokenPairDto {
    TokenPairDto {
        success: true,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        user: tokens.user.into_dto(),
    }
}

/// Register a new guest account.
///
/// Rate limited per client IP.
///
/// # Returns
/// - `201 Created` - Account created, tokens issued
/// - `400 Bad Request` - Missing field or email already registered
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = TokenPairDto),
        (status = 400, description = "Missing field or email already registered", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt)
        .register(RegisterParams {
            username: payload.username,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(token_pair_dto(tokens))))
}

/// Log in with email and password.
///
/// Rate limited per client IP.
///
/// # Returns
/// - `200 OK` - Tokens issued
/// - `400 Bad Request` - Unknown email or wrong password
/// - `403 Forbidden` - Account deactivated
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenPairDto),
        (status = 400, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account is inactive", body = ErrorDto),
        (status = 429, description = "Too many requests"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state.db, &state.jwt)
        .login(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(token_pair_dto(tokens))))
}

/// Exchange a refresh token for a new access token.
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "New access token", body = AccessTokenDto),
        (status = 401, description = "Refresh token invalid, revoked or expired", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthService::new(&state.db, &state.jwt)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AccessTokenDto {
            success: true,
            access_token,
        }),
    ))
}

/// Revoke a refresh token.
///
/// Succeeds even when the token was already revoked.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.jwt)
        .logout(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Check whether an access or refresh token is valid and return its claims.
///
/// Refresh tokens are checked by signature only; a revoked token still decodes.
#[utoipa::path(
    post,
    path = "/api/auth/verify-token",
    tag = AUTH_TAG,
    request_body = VerifyTokenDto,
    responses(
        (status = 200, description = "Token is valid", body = VerifiedTokenDto),
        (status = 400, description = "Missing token or unknown token type", body = ErrorDto),
        (status = 401, description = "Invalid or expired token", body = ErrorDto)
    ),
)]
pub async fn verify_token(
    State(state): State<AppState>,
    Json(payload): Json<VerifyTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let decoded =
        AuthService::new(&state.db, &state.jwt).verify_token(&payload.token, &payload.kind)?;

    Ok((
        StatusCode::OK,
        Json(VerifiedTokenDto {
            valid: true,
            decoded,
        }),
    ))
}

/// Get the authenticated user.
///
/// # Access Control
/// - Any active, authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated user", body = UserResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Account is inactive", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}
