use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginationParams},
        user::{
            NotificationListDto, NotificationResponseDto, PaginatedUsersDto, SendNotificationDto,
            UpdateUserDto, UserListDto, UserResponseDto, UserReviewListDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{review::ReviewService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user.
///
/// # Access Control
/// - `Admin` - Only admins can list users
///
/// # Returns
/// - `200 OK` - Page of users
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get a user by id.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get_by_id(&caller, id).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Update a user's profile.
///
/// Only the profile fields in the body are writable; role, email and flags are not.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserResponseDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db)
        .update(&caller, id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// Deactivate a user account.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deactivated", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db).deactivate(&caller, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deactivated"))))
}

/// List every review a user has written.
#[utoipa::path(
    get,
    path = "/api/users/{id}/reviews",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Reviews by the user", body = UserReviewListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).list_by_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(UserReviewListDto {
            success: true,
            reviews: reviews.into_iter().map(|r| r.into_dto()).collect(),
        }),
    ))
}

/// List the active users holding a role.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users/role/{role}",
    tag = USER_TAG,
    params(("role" = i32, Path, description = "0 admin, 1 host, 2 guest")),
    responses(
        (status = 200, description = "Active users with the role", body = UserListDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users_by_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(role): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).get_by_role(role).await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            success: true,
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}

/// Look up an active user by email.
///
/// # Access Control
/// - `Admin` - Only admins can look up accounts
#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    tag = USER_TAG,
    params(("email" = String, Path, description = "Email address")),
    responses(
        (status = 200, description = "Active user", body = UserResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found or inactive", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db).get_by_email(&email).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponseDto {
            success: true,
            user: user.into_dto(),
        }),
    ))
}

/// List a user's notifications, oldest first.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    get,
    path = "/api/users/{id}/notifications",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Notifications", body = NotificationListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "User not found or inactive", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let notifications = UserService::new(&state.db)
        .get_notifications(&caller, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationListDto {
            success: true,
            notifications,
        }),
    ))
}

/// Send a notification to a user.
///
/// # Access Control
/// - `Admin` - Only admins can send notifications
#[utoipa::path(
    post,
    path = "/api/users/{id}/notifications",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "Recipient user id")),
    request_body = SendNotificationDto,
    responses(
        (status = 201, description = "Notification stored", body = NotificationResponseDto),
        (status = 400, description = "Missing type", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found or inactive", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SendNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let notification = UserService::new(&state.db)
        .send_notification(&caller, id, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NotificationResponseDto {
            success: true,
            notification,
        }),
    ))
}

/// Mark a notification as read.
///
/// # Access Control
/// - The user themself, or an admin
#[utoipa::path(
    put,
    path = "/api/users/{id}/notifications/{notification_id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("notification_id" = String, Path, description = "Notification id")
    ),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the user or an admin", body = ErrorDto),
        (status = 404, description = "User or notification not found", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, notification_id)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let notification = UserService::new(&state.db)
        .mark_notification_read(&caller, id, &notification_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationResponseDto {
            success: true,
            notification,
        }),
    ))
}
